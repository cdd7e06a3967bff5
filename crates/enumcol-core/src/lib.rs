//! Core runtime for enumcol: canonical scalar payloads, the identity
//! registry, sub-type dispatch, and the column-type bridge exported via the
//! `prelude`.

pub mod column;
pub mod error;
pub mod factory;
pub mod registry;
pub mod scalar;
pub mod subtype;
pub mod type_registry;
pub mod value;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary. Error enums and the framework
/// registry seam stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        column::{ColumnType, EnumColumnType, SelfTypedEnumType},
        factory::{EnumFactory, FactoryCatalog, ScalarEnumFactory},
        registry::EnumRegistry,
        scalar::Scalar,
        subtype::SubtypeDispatch,
        value::EnumValue,
    };
}
