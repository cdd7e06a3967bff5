use super::{ColumnError, ColumnType, derive_type_name, register_column_type};
use crate::{
    factory::EnumFactory, registry::EnumRegistry, scalar::Scalar, subtype::SubtypeDispatch,
    type_registry::TypeRegistry, value::EnumValue,
};
use std::{any::Any, sync::Arc};

///
/// SelfTypedEnumType
///
/// Column type that doubles as its own enum factory: the host name is the
/// identity namespace and the type is its own default delegate, so no
/// factory catalog is involved.
///
/// The framework-owned shared instance never needs duplicating; per-value
/// instances are detached copies handed out by the identity registry.
///

pub struct SelfTypedEnumType {
    host: String,
    type_name: String,
    registry: Arc<EnumRegistry>,
    dispatch: Arc<SubtypeDispatch>,
}

impl SelfTypedEnumType {
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        registry: Arc<EnumRegistry>,
        dispatch: Arc<SubtypeDispatch>,
    ) -> Self {
        let host = host.into();
        let type_name = derive_type_name(&host);

        Self {
            host,
            type_name,
            registry,
            dispatch,
        }
    }

    /// Host name, which is also the identity namespace.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Self-registration under this type's derived name.
    pub fn register_into(self: Arc<Self>, types: &dyn TypeRegistry) -> Result<bool, ColumnError> {
        register_column_type(self, types)
    }

    fn owns(&self, value: &EnumValue) -> bool {
        value.namespace() == self.host || self.dispatch.is_registered(&self.host, value.namespace())
    }
}

impl EnumFactory for SelfTypedEnumType {
    fn namespace(&self) -> &str {
        &self.host
    }
}

impl ColumnType for SelfTypedEnumType {
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
        match self.dispatch.resolve(&self.host, &raw) {
            Some(delegate) => Ok(delegate.create(&self.registry, raw)),
            None => Ok(self.create(&self.registry, raw)),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
