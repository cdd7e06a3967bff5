//! Identity-cached enum value objects with ORM column-type bindings.
//!
//! ## Crate layout
//! - `core`: scalar payloads, the identity registry, sub-type dispatch, and
//!   the column-type bridge.
//!
//! The `prelude` module mirrors the surface used by application bootstrap
//! code: construct the shared registries once, catalog the enum factories,
//! then hand the column types to the framework's type registry.

pub use enumcol_core as core;

pub use enumcol_core::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use enumcol_core::{
        column::{
            COLUMN_LENGTH, ColumnType, EnumColumnType, SelfTypedEnumType, derive_type_name,
            register_column_type,
        },
        factory::{EnumFactory, FactoryCatalog, ScalarEnumFactory},
        registry::EnumRegistry,
        scalar::{Scalar, ScalarKey, ScalarTag},
        subtype::{RegexMatcher, SubtypeDispatch, SubtypeMatcher},
        type_registry::{MemoryTypeRegistry, TypeRegistry},
        value::EnumValue,
    };
}
