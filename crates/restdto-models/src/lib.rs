//! restdto-models - Record schemas for the file-sync/share REST API.
//!
//! A code-generated API client ships one conversion class per wire
//! entity. Here each entity is a single declarative [`RecordSchema`], grouped
//! by API family the way the server groups its services: `rest` (request and
//! response envelopes), `idm` (identity management), and `tree` (the file
//! tree).
//!
//! [`default_registry`] wires every model into one [`SchemaRegistry`] so
//! `Ref` fields resolve across families.

pub mod idm;
pub mod rest;
pub mod tree;

use restdto_schema::{RecordSchema, SchemaRegistry};

/// A registry holding every model schema in this crate.
pub fn default_registry() -> SchemaRegistry {
    let registry = SchemaRegistry::new();
    for schema in all_models() {
        registry.register(schema);
    }
    registry
}

/// Every model schema, across all families.
pub fn all_models() -> Vec<RecordSchema> {
    let mut models = Vec::new();
    models.extend(rest::models());
    models.extend(idm::models());
    models.extend(tree::models());
    models
}
