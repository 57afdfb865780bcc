//! Hard-failure taxonomy.
//!
//! Only configuration and programming errors fail a call; payload problems go
//! through the diagnostic channel instead (see [`crate::diagnostics`]).

use restdto_schema::RegistryError;
use thiserror::Error;

/// Errors raised by the marshalling engine and the record mutation API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    /// A `Ref` field or a by-name lookup targets a record that was never
    /// registered.
    #[error(transparent)]
    SchemaMismatch(#[from] RegistryError),
    /// Programmatic write to a key the record's schema does not declare.
    #[error("record {record} has no declared field: {key}")]
    UnknownField { record: String, key: String },
    /// Programmatic write of a value whose shape contradicts the declared
    /// field type.
    #[error("field {key} of {record} expects {expected}, got {actual}")]
    TypeMismatch {
        record: String,
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}
