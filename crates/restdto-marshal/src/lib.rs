//! restdto-marshal - Schema-driven marshalling between JSON payloads and
//! typed records.
//!
//! The engine converts untyped wire payloads ([`serde_json::Value`]) into
//! [`Record`] values shaped by a [`restdto_schema::RecordSchema`], and back.
//! Conversion is lenient by policy: a payload field that cannot be converted
//! is left absent and reported through the [`Diagnostic`] channel instead of
//! failing the call, so a client stays usable against a server that is ahead
//! of or behind its own schema version. The only hard failure is a schema
//! configuration error (an unregistered `Ref` target).
//!
//! Both directions are pure single-pass recursions with no retained state;
//! concurrent conversions are safe because every call allocates its own
//! output and only borrows its input.

pub mod decode;
pub mod diagnostics;
pub mod encode;
pub mod error;
pub mod record;

pub use decode::{Decoded, Marshaller};
pub use diagnostics::{Diagnostic, DiagnosticCode, PathSegment};
pub use error::MarshalError;
pub use record::{FieldValue, Record};
