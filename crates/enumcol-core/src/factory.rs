use crate::{registry::EnumRegistry, scalar::Scalar, value::EnumValue};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

///
/// EnumFactory
///
/// The capability a delegate must satisfy to service enum values: it owns
/// an identity namespace and can produce value objects in it.
///

pub trait EnumFactory: Send + Sync {
    /// Identity partition for values created by this factory.
    fn namespace(&self) -> &str;

    /// Produce the singleton for `scalar`, creating it on first request.
    fn create(&self, registry: &EnumRegistry, scalar: Scalar) -> EnumValue {
        registry.get_or_create(self.namespace(), scalar)
    }
}

///
/// ScalarEnumFactory
///
/// Plain named factory; the common case where a namespace needs no custom
/// creation behavior.
///

#[derive(Clone, Debug)]
pub struct ScalarEnumFactory {
    namespace: String,
}

impl ScalarEnumFactory {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl EnumFactory for ScalarEnumFactory {
    fn namespace(&self) -> &str {
        &self.namespace
    }
}

///
/// FactoryCatalog
///
/// Namespace → factory lookup. Column types resolve their default delegate
/// against this catalog at conversion time, so a factory registered after
/// the column type is constructed is still found.
///

#[derive(Default)]
pub struct FactoryCatalog {
    factories: RwLock<HashMap<String, Arc<dyn EnumFactory>>>,
}

impl FactoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `factory` under its own namespace, replacing any previous
    /// binding for that namespace.
    pub fn put(&self, factory: Arc<dyn EnumFactory>) {
        let namespace = factory.namespace().to_string();
        self.write().insert(namespace, factory);
    }

    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<Arc<dyn EnumFactory>> {
        self.read().get(namespace).cloned()
    }

    #[must_use]
    pub fn contains(&self, namespace: &str) -> bool {
        self.read().contains_key(namespace)
    }

    /// Test-isolation reset.
    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn EnumFactory>>> {
        self.factories
            .read()
            .expect("factory catalog RwLock poisoned while acquiring read lock")
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn EnumFactory>>> {
        self.factories
            .write()
            .expect("factory catalog RwLock poisoned while acquiring write lock")
    }
}
