//! restdto-schema - Declarative record schemas for REST DTO marshalling.
//!
//! A generated API client normally carries one near-identical conversion
//! class per wire entity. This crate replaces that layer with data: each
//! entity is described once as a [`RecordSchema`] (an ordered, closed set of
//! [`FieldSchema`] declarations), and a single generic engine drives all
//! conversions off that metadata.
//!
//! Provides the [`FieldType`] algebra, a fluent [`SchemaBuilder`], structural
//! [`validate_schema`] checks, and a shared [`SchemaRegistry`] that resolves
//! `Ref` fields by record name.

pub mod builder;
pub mod registry;
pub mod schema;
pub mod validate;

pub use builder::SchemaBuilder;
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{FieldSchema, FieldType, RecordSchema};
pub use validate::validate_schema;
