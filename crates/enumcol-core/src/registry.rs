use crate::{
    scalar::{Scalar, ScalarKey},
    value::EnumValue,
};
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};
use thiserror::Error as ThisError;

///
/// RegistryError
///
/// Identity-registry invariant violations. Both are programmer errors and
/// are surfaced to the immediate caller, never silently tolerated.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("enum of namespace '{namespace}' and key {key} is already registered")]
    AlreadyRegistered { namespace: String, key: String },

    #[error("enum of namespace '{namespace}' and key {key} is not registered")]
    NotRegistered { namespace: String, key: String },
}

///
/// EnumRegistry
///
/// Append-only identity cache partitioned by namespace: one [`EnumValue`]
/// per `(namespace, canonical key)` pair for the registry's lifetime.
///
/// Constructed explicitly and shared by handle; mutation is guarded by a
/// mutex so concurrent `get_or_create` calls on the same namespace can not
/// double-allocate an identity.
///

#[derive(Debug, Default)]
pub struct EnumRegistry {
    entries: Mutex<HashMap<(String, ScalarKey), EnumValue>>,
}

impl EnumRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the singleton for `(namespace, scalar)`, creating it on first
    /// request. Later calls with an equal canonical key return the identical
    /// instance.
    pub fn get_or_create(&self, namespace: &str, scalar: Scalar) -> EnumValue {
        let key = scalar.key();

        self.lock()
            .entry((namespace.to_string(), key))
            .or_insert_with(|| EnumValue::new(namespace, scalar))
            .clone()
    }

    /// Explicit insertion path. The registry never overwrites: an occupied
    /// slot fails with [`RegistryError::AlreadyRegistered`].
    pub fn add(&self, value: EnumValue) -> Result<(), RegistryError> {
        let key = value.key();
        let mut entries = self.lock();

        if entries.contains_key(&(value.namespace().to_string(), key.clone())) {
            return Err(RegistryError::AlreadyRegistered {
                namespace: value.namespace().to_string(),
                key: key.describe(),
            });
        }
        entries.insert((value.namespace().to_string(), key), value);

        Ok(())
    }

    /// Lookup-only counterpart of `get_or_create`; distinguishes "never
    /// created" from "created but different instance" bugs during testing.
    pub fn get(&self, namespace: &str, scalar: &Scalar) -> Result<EnumValue, RegistryError> {
        let key = scalar.key();

        self.lock()
            .get(&(namespace.to_string(), key.clone()))
            .cloned()
            .ok_or_else(|| RegistryError::NotRegistered {
                namespace: namespace.to_string(),
                key: key.describe(),
            })
    }

    #[must_use]
    pub fn contains(&self, namespace: &str, scalar: &Scalar) -> bool {
        self.lock()
            .contains_key(&(namespace.to_string(), scalar.key()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every entry. Test-isolation reset; production code has no
    /// reason to call this.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(String, ScalarKey), EnumValue>> {
        self.entries.lock().expect("enum registry mutex poisoned")
    }
}
