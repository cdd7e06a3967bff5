use crate::{
    column::ColumnError, registry::RegistryError, scalar::ScalarError, subtype::SubtypeError,
    type_registry::TypeRegistryError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-wide error aggregating each module's taxonomy. Every condition is
/// a programmer or configuration error surfaced synchronously to the
/// immediate caller; nothing is retried or swallowed.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Column(#[from] ColumnError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Scalar(#[from] ScalarError),

    #[error(transparent)]
    Subtype(#[from] SubtypeError),

    #[error(transparent)]
    TypeRegistry(#[from] TypeRegistryError),
}
