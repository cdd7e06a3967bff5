//! End-to-end bootstrap: the wiring an embedding application performs once
//! at startup, exercised through the facade prelude.

use enumcol::prelude::*;
use std::sync::Arc;

#[test]
fn status_column_bootstrap_round_trips() {
    let registry = Arc::new(EnumRegistry::new());
    let dispatch = Arc::new(SubtypeDispatch::new());
    let catalog = Arc::new(FactoryCatalog::new());
    catalog.put(Arc::new(ScalarEnumFactory::new("Status")));

    let column = Arc::new(
        EnumColumnType::new("StatusType", registry, dispatch.clone(), catalog)
            .expect("StatusType carries the type marker"),
    );

    let types = MemoryTypeRegistry::new();
    assert_eq!(column.clone().register_into(&types), Ok(true));
    assert!(types.has_type("status"));
    assert_eq!(column.clone().register_into(&types), Ok(false));

    // sub-type bootstrap: urgent statuses route to their own family
    dispatch
        .register_pattern(
            "StatusType",
            Arc::new(ScalarEnumFactory::new("UrgentStatus")),
            "urgent",
        )
        .expect("fresh delegate registration");

    let shared = types.get_type("status").expect("registered above");

    let active = shared.from_storage(Scalar::from("active")).unwrap();
    let active_again = shared.from_storage(Scalar::from("active")).unwrap();
    let urgent = shared.from_storage(Scalar::from("urgent fix")).unwrap();

    assert!(active.same(&active_again));
    assert_eq!(active.namespace(), "Status");
    assert_eq!(urgent.namespace(), "UrgentStatus");

    let stored = shared.to_storage(Some(&active)).unwrap();
    assert_eq!(stored, Scalar::Text("active".to_string()));
    let revived = shared.from_storage(stored).unwrap();
    assert!(active.same(&revived));

    assert_eq!(shared.declaration(), "VARCHAR(64)");
    assert!(shared.requires_comment_hint());
    assert!(!enumcol::VERSION.is_empty());
}

#[test]
fn self_typed_bootstrap_needs_no_catalog() {
    let registry = Arc::new(EnumRegistry::new());
    let dispatch = Arc::new(SubtypeDispatch::new());

    let column = Arc::new(SelfTypedEnumType::new("ColorType", registry, dispatch));

    let types = MemoryTypeRegistry::new();
    assert_eq!(column.clone().register_into(&types), Ok(true));

    let shared = types.get_type("color").expect("registered above");
    let red = shared.from_storage(Scalar::from("red")).unwrap();
    let red_again = shared.from_storage(Scalar::from("red")).unwrap();

    assert!(red.same(&red_again));
    assert_eq!(red.namespace(), "ColorType");
    assert_eq!(derive_type_name("ColorType"), "color");
}
