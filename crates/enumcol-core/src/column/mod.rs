mod self_typed;


pub use self_typed::SelfTypedEnumType;

use crate::{
    factory::{EnumFactory, FactoryCatalog},
    registry::EnumRegistry,
    scalar::Scalar,
    subtype::{SubtypeDispatch, SubtypeError},
    type_registry::TypeRegistry,
    value::EnumValue,
};
use convert_case::{Case, Casing};
use std::{any::Any, sync::Arc};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Declared width of the backing text column.
pub const COLUMN_LENGTH: usize = 64;

/// Conventional marker suffix on column-type host names.
const TYPE_SUFFIX: &str = "Type";

///
/// ColumnError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ColumnError {
    #[error("expected null or an enum of the '{type_name}' family for storage, got {found}")]
    UnexpectedValueForStorage { type_name: String, found: String },

    #[error("default enum namespace could not be parsed from host name '{host}'")]
    CouldNotDetermineDefaultClass { host: String },

    #[error("no factory is cataloged for default enum namespace '{expected}' of host '{host}'")]
    DefaultClassNotFound { host: String, expected: String },

    #[error("type name '{name}' is already occupied by a different column type")]
    NameOccupied { name: String },

    #[error(transparent)]
    Subtype(#[from] SubtypeError),
}

///
/// ColumnType
///
/// The framework-facing bridge contract: converts between stored scalars
/// and enum value objects, and describes the column to schema generation.
///

pub trait ColumnType: Send + Sync {
    /// Snake-case name this type registers under.
    fn name(&self) -> &str;

    /// SQL declaration snippet for the backing column.
    fn declaration(&self) -> String {
        format!("VARCHAR({COLUMN_LENGTH})")
    }

    /// Whether schema comments must type-hint the column. Without the hint,
    /// reverse engineering can not tell this type apart from a plain text
    /// column.
    fn requires_comment_hint(&self) -> bool {
        true
    }

    /// Serialize a value object (or null) to its stored payload.
    fn to_storage(&self, value: Option<&EnumValue>) -> Result<Scalar, ColumnError>;

    /// Revive the value object for a stored payload. The scalar's type is
    /// never coerced on the way through; numeric-vs-string column round
    /// tripping is the calling framework's concern.
    fn from_storage(&self, raw: Scalar) -> Result<EnumValue, ColumnError>;

    /// Concrete-type hook for registration conflict checks.
    fn as_any(&self) -> &dyn Any;
}

/// Derive the registry type name from a host name: strip the trailing
/// marker and snake-case the remainder, `ExchangeRateType` → `exchange_rate`.
/// A host without the marker snake-cases whole.
#[must_use]
pub fn derive_type_name(host: &str) -> String {
    base_name(host).to_case(Case::Snake)
}

/// Register `column` with the framework's type registry under its own name.
/// Returns whether registration actually happened: `false` when an
/// equivalent column type already holds the name, [`ColumnError::NameOccupied`]
/// when a different one does.
pub fn register_column_type(
    column: Arc<dyn ColumnType>,
    types: &dyn TypeRegistry,
) -> Result<bool, ColumnError> {
    let name = column.name().to_string();

    if let Some(existing) = types.get_type(&name) {
        if existing.as_any().type_id() == column.as_any().type_id() && existing.name() == name {
            return Ok(false);
        }
        return Err(ColumnError::NameOccupied { name });
    }

    if types.register_type(&name, column).is_err() {
        // lost a registration race
        return Err(ColumnError::NameOccupied { name });
    }

    Ok(true)
}

fn base_name(host: &str) -> &str {
    host.strip_suffix(TYPE_SUFFIX)
        .filter(|base| !base.is_empty())
        .unwrap_or(host)
}

fn default_namespace(host: &str) -> Result<&str, ColumnError> {
    host.strip_suffix(TYPE_SUFFIX)
        .filter(|base| !base.is_empty())
        .ok_or_else(|| ColumnError::CouldNotDetermineDefaultClass {
            host: host.to_string(),
        })
}

///
/// EnumColumnType
///
/// Standard bridge keeping value objects and the column type as two
/// separate types. Holds shared handles to the identity registry, the
/// sub-type dispatch table, and the factory catalog its default delegate
/// resolves against.
///

pub struct EnumColumnType {
    host: String,
    type_name: String,
    default_namespace: String,
    registry: Arc<EnumRegistry>,
    dispatch: Arc<SubtypeDispatch>,
    catalog: Arc<FactoryCatalog>,
}

impl EnumColumnType {
    /// Build a column type for `host`, e.g. `"StatusType"`. Fails when the
    /// default enum namespace can not be parsed from the host name.
    pub fn new(
        host: impl Into<String>,
        registry: Arc<EnumRegistry>,
        dispatch: Arc<SubtypeDispatch>,
        catalog: Arc<FactoryCatalog>,
    ) -> Result<Self, ColumnError> {
        let host = host.into();
        let default_namespace = default_namespace(&host)?.to_string();
        let type_name = default_namespace.to_case(Case::Snake);

        Ok(Self {
            host,
            type_name,
            default_namespace,
            registry,
            dispatch,
            catalog,
        })
    }

    /// Host name this column type was derived from.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Namespace of the default delegate, e.g. `Status` for `StatusType`.
    #[must_use]
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Self-registration under this type's derived name.
    pub fn register_into(self: Arc<Self>, types: &dyn TypeRegistry) -> Result<bool, ColumnError> {
        register_column_type(self, types)
    }

    fn default_delegate(&self) -> Result<Arc<dyn EnumFactory>, ColumnError> {
        self.catalog
            .get(&self.default_namespace)
            .ok_or_else(|| ColumnError::DefaultClassNotFound {
                host: self.host.clone(),
                expected: self.default_namespace.clone(),
            })
    }

    /// Whether `value` belongs to this column's enum family: the default
    /// namespace or any delegate registered under the host.
    fn owns(&self, value: &EnumValue) -> bool {
        value.namespace() == self.default_namespace
            || self.dispatch.is_registered(&self.host, value.namespace())
    }
}

impl ColumnType for EnumColumnType {
    fn name(&self) -> &str {
        &self.type_name
    }

    fn to_storage(&self, value: Option<&EnumValue>) -> Result<Scalar, ColumnError> {
        match value {
            None => Ok(Scalar::Null),
            Some(value) if self.owns(value) => Ok(value.scalar().clone()),
            Some(value) => Err(ColumnError::UnexpectedValueForStorage {
                type_name: self.type_name.clone(),
                found: format!("enum of namespace '{}'", value.namespace()),
            }),
        }
    }

    fn from_storage(&self, raw: Scalar) -> Result<EnumValue, ColumnError> {
        let delegate = match self.dispatch.resolve(&self.host, &raw) {
            Some(delegate) => delegate,
            None => self.default_delegate()?,
        };

        Ok(delegate.create(&self.registry, raw))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
