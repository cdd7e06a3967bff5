use crate::column::ColumnType;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error as ThisError;

///
/// TypeRegistryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TypeRegistryError {
    #[error("a column type is already registered under name '{name}'")]
    Occupied { name: String },

    #[error("no column type is registered under name '{name}'")]
    Unknown { name: String },
}

///
/// TypeRegistry
///
/// Seam to the host framework's column-type registry. The framework keeps
/// one shared instance per registered name; this library only supplies
/// values into it and never reimplements the registry itself.
///

pub trait TypeRegistry: Send + Sync {
    /// Bind `column` under `name`; an occupied name fails.
    fn register_type(
        &self,
        name: &str,
        column: Arc<dyn ColumnType>,
    ) -> Result<(), TypeRegistryError>;

    fn has_type(&self, name: &str) -> bool;

    /// Shared instance registered under `name`, if any.
    fn get_type(&self, name: &str) -> Option<Arc<dyn ColumnType>>;

    /// Replace an existing binding; an unknown name fails.
    fn override_type(
        &self,
        name: &str,
        column: Arc<dyn ColumnType>,
    ) -> Result<(), TypeRegistryError>;
}

///
/// MemoryTypeRegistry
///
/// In-memory implementation used by tests and simple bootstraps.
///

#[derive(Default)]
pub struct MemoryTypeRegistry {
    types: RwLock<HashMap<String, Arc<dyn ColumnType>>>,
}

impl MemoryTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn ColumnType>>> {
        self.types
            .read()
            .expect("type registry RwLock poisoned while acquiring read lock")
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn ColumnType>>> {
        self.types
            .write()
            .expect("type registry RwLock poisoned while acquiring write lock")
    }
}

impl TypeRegistry for MemoryTypeRegistry {
    fn register_type(
        &self,
        name: &str,
        column: Arc<dyn ColumnType>,
    ) -> Result<(), TypeRegistryError> {
        let mut types = self.write();
        if types.contains_key(name) {
            return Err(TypeRegistryError::Occupied {
                name: name.to_string(),
            });
        }
        types.insert(name.to_string(), column);

        Ok(())
    }

    fn has_type(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    fn get_type(&self, name: &str) -> Option<Arc<dyn ColumnType>> {
        self.read().get(name).cloned()
    }

    fn override_type(
        &self,
        name: &str,
        column: Arc<dyn ColumnType>,
    ) -> Result<(), TypeRegistryError> {
        let mut types = self.write();
        if !types.contains_key(name) {
            return Err(TypeRegistryError::Unknown {
                name: name.to_string(),
            });
        }
        types.insert(name.to_string(), column);

        Ok(())
    }
}
