//! SchemaRegistry — a namespace of named record schemas.
//!
//! `Ref` fields are resolved against a registry at conversion time. A lookup
//! miss is a configuration error (a schema was referenced but never
//! registered), not a payload error, and surfaces as
//! [`RegistryError::SchemaMismatch`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use super::schema::RecordSchema;

/// Hard failure raised when a record name has no registered schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no schema registered for record: {name}")]
    SchemaMismatch { name: String },
}

/// Inner state of a registry (name → schema map).
#[derive(Debug, Default)]
struct SchemaRegistryInner {
    schemas: HashMap<String, Arc<RecordSchema>>,
}

/// A shared, clone-cheap registry of named record schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    inner: Arc<RwLock<SchemaRegistryInner>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its own name. If the name already exists, the
    /// existing entry is returned unchanged.
    pub fn register(&self, schema: RecordSchema) -> Arc<RecordSchema> {
        let name = schema.name.clone();
        {
            let inner = self.inner.read().unwrap();
            if let Some(existing) = inner.schemas.get(&name) {
                return Arc::clone(existing);
            }
        }
        let entry = Arc::new(schema);
        let mut inner = self.inner.write().unwrap();
        inner.schemas.insert(name, Arc::clone(&entry));
        entry
    }

    /// Look up a schema by record name.
    pub fn get(&self, name: &str) -> Option<Arc<RecordSchema>> {
        let inner = self.inner.read().unwrap();
        inner.schemas.get(name).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        let inner = self.inner.read().unwrap();
        inner.schemas.contains_key(name)
    }

    /// Resolve a record name, failing hard if it was never registered.
    pub fn resolve(&self, name: &str) -> Result<Arc<RecordSchema>, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::SchemaMismatch {
            name: name.to_string(),
        })
    }

    /// All registered record names, in no particular order.
    pub fn names(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap();
        inner.schemas.keys().cloned().collect()
    }
}
