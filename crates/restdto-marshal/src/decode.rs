//! Payload decoding — `from_payload` and friends.
//!
//! Decoding walks the schema, not the payload: every declared field is looked
//! up in the payload object, converted per its declared type, and either
//! stored or skipped with a diagnostic. Unknown payload keys are never
//! visited, so they cannot leak into the record or round-trip back out.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use restdto_schema::{FieldType, RecordSchema, SchemaRegistry};
use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticCode, PathSegment};
use crate::error::MarshalError;
use crate::record::{FieldValue, Record};

/// Outcome of a decode call: the (possibly partially) populated record plus
/// every per-field condition encountered along the way.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub record: Record,
    pub diagnostics: Vec<Diagnostic>,
}

/// Bidirectional converter between raw payloads and typed records.
///
/// Holds a [`SchemaRegistry`] handle for resolving `Ref` fields. Stateless
/// otherwise; a single instance can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Marshaller {
    registry: SchemaRegistry,
}

impl Marshaller {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Decode a payload against a schema.
    ///
    /// Malformed payload data degrades to absent fields plus diagnostics;
    /// the only hard failure is an unresolvable `Ref` target
    /// ([`MarshalError::SchemaMismatch`]).
    pub fn from_payload(
        &self,
        schema: &Arc<RecordSchema>,
        payload: &Value,
    ) -> Result<Decoded, MarshalError> {
        let mut diagnostics = Vec::new();
        let mut path = Vec::new();
        let record = self.decode_record(schema, payload, &mut path, &mut diagnostics)?;
        Ok(Decoded {
            record,
            diagnostics,
        })
    }

    /// Decode a payload against a registered schema, looked up by record
    /// name. An unknown name is a [`MarshalError::SchemaMismatch`].
    pub fn from_named(&self, name: &str, payload: &Value) -> Result<Decoded, MarshalError> {
        let schema = self.registry.resolve(name)?;
        self.from_payload(&schema, payload)
    }

    fn decode_record(
        &self,
        schema: &Arc<RecordSchema>,
        payload: &Value,
        path: &mut Vec<PathSegment>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Record, MarshalError> {
        let mut record = Record::new(Arc::clone(schema));
        let obj = match payload {
            Value::Object(obj) => obj,
            // Null counts as "nothing received": all fields absent, no noise.
            Value::Null => return Ok(record),
            other => {
                report(
                    diagnostics,
                    DiagnosticCode::InvalidType,
                    path.clone(),
                    format!("expected object, got {}", json_type_name(other)),
                );
                return Ok(record);
            }
        };
        for field in &schema.fields {
            let Some(value) = obj.get(&field.key) else {
                continue;
            };
            // An explicit null is the wire spelling of "unset".
            if value.is_null() {
                continue;
            }
            path.push(PathSegment::Key(field.key.clone()));
            let decoded = self.decode_value(&field.type_, value, path, diagnostics)?;
            path.pop();
            if let Some(decoded) = decoded {
                record.insert_unchecked(field.key.clone(), decoded);
            }
        }
        Ok(record)
    }

    fn decode_value(
        &self,
        type_: &FieldType,
        value: &Value,
        path: &mut Vec<PathSegment>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<FieldValue>, MarshalError> {
        match type_ {
            FieldType::Str => Ok(decode_str(value, path, diagnostics)),
            FieldType::Num => Ok(decode_num(value, path, diagnostics)),
            FieldType::Bool => Ok(decode_bool(value, path, diagnostics)),
            FieldType::Date => Ok(decode_date(value, path, diagnostics)),
            FieldType::Any => Ok(Some(FieldValue::Any(value.clone()))),
            FieldType::Ref(name) => self.decode_ref(name, value, path, diagnostics),
            FieldType::List(elem) => self.decode_list(elem, value, path, diagnostics),
            FieldType::Map(val_type) => self.decode_map(val_type, value, path, diagnostics),
        }
    }

    fn decode_ref(
        &self,
        name: &str,
        value: &Value,
        path: &mut Vec<PathSegment>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<FieldValue>, MarshalError> {
        if !value.is_object() {
            report(
                diagnostics,
                DiagnosticCode::InvalidType,
                path.clone(),
                format!("expected {name} object, got {}", json_type_name(value)),
            );
            return Ok(None);
        }
        let schema = self.registry.resolve(name)?;
        let record = self.decode_record(&schema, value, path, diagnostics)?;
        Ok(Some(FieldValue::Record(record)))
    }

    fn decode_list(
        &self,
        elem: &FieldType,
        value: &Value,
        path: &mut Vec<PathSegment>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<FieldValue>, MarshalError> {
        let Some(items) = value.as_array() else {
            report(
                diagnostics,
                DiagnosticCode::MalformedCollection,
                path.clone(),
                format!("expected array, got {}", json_type_name(value)),
            );
            return Ok(None);
        };
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            path.push(PathSegment::Index(i));
            if item.is_null() {
                // Lists are positional; a null element cannot become
                // "absent", so it is dropped and reported.
                report(
                    diagnostics,
                    DiagnosticCode::InvalidType,
                    path.clone(),
                    "null element dropped",
                );
            } else if let Some(decoded) = self.decode_value(elem, item, path, diagnostics)? {
                out.push(decoded);
            }
            path.pop();
        }
        Ok(Some(FieldValue::List(out)))
    }

    fn decode_map(
        &self,
        val_type: &FieldType,
        value: &Value,
        path: &mut Vec<PathSegment>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<FieldValue>, MarshalError> {
        let Some(obj) = value.as_object() else {
            report(
                diagnostics,
                DiagnosticCode::MalformedCollection,
                path.clone(),
                format!("expected object, got {}", json_type_name(value)),
            );
            return Ok(None);
        };
        let mut out = std::collections::BTreeMap::new();
        for (key, item) in obj {
            // Like record fields, a null entry value means the entry is
            // unset.
            if item.is_null() {
                continue;
            }
            path.push(PathSegment::Key(key.clone()));
            if let Some(decoded) = self.decode_value(val_type, item, path, diagnostics)? {
                out.insert(key.clone(), decoded);
            }
            path.pop();
        }
        Ok(Some(FieldValue::Map(out)))
    }
}

// Primitive coercion policy: pass through exact types, coerce when the
// conversion is lossless and unambiguous, otherwise omit with a diagnostic.

fn decode_str(
    value: &Value,
    path: &[PathSegment],
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<FieldValue> {
    match value {
        Value::String(s) => Some(FieldValue::Str(s.clone())),
        Value::Number(n) => Some(FieldValue::Str(n.to_string())),
        other => {
            report(
                diagnostics,
                DiagnosticCode::InvalidType,
                path.to_vec(),
                format!("expected string, got {}", json_type_name(other)),
            );
            None
        }
    }
}

fn decode_num(
    value: &Value,
    path: &[PathSegment],
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<FieldValue> {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(n) => Some(FieldValue::Num(n)),
            None => {
                report(
                    diagnostics,
                    DiagnosticCode::InvalidType,
                    path.to_vec(),
                    "number out of range",
                );
                None
            }
        },
        Value::String(s) => match s.parse::<f64>() {
            Ok(n) => Some(FieldValue::Num(n)),
            Err(_) => {
                report(
                    diagnostics,
                    DiagnosticCode::InvalidType,
                    path.to_vec(),
                    format!("non-numeric string: {s:?}"),
                );
                None
            }
        },
        other => {
            report(
                diagnostics,
                DiagnosticCode::InvalidType,
                path.to_vec(),
                format!("expected number, got {}", json_type_name(other)),
            );
            None
        }
    }
}

fn decode_bool(
    value: &Value,
    path: &[PathSegment],
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<FieldValue> {
    match value {
        Value::Bool(b) => Some(FieldValue::Bool(*b)),
        Value::String(s) if s == "true" => Some(FieldValue::Bool(true)),
        Value::String(s) if s == "false" => Some(FieldValue::Bool(false)),
        other => {
            report(
                diagnostics,
                DiagnosticCode::InvalidType,
                path.to_vec(),
                format!("expected boolean, got {}", json_type_name(other)),
            );
            None
        }
    }
}

fn decode_date(
    value: &Value,
    path: &[PathSegment],
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<FieldValue> {
    let Value::String(s) = value else {
        report(
            diagnostics,
            DiagnosticCode::InvalidType,
            path.to_vec(),
            format!("expected RFC 3339 string, got {}", json_type_name(value)),
        );
        return None;
    };
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Some(FieldValue::Date(dt.with_timezone(&Utc))),
        Err(err) => {
            report(
                diagnostics,
                DiagnosticCode::InvalidType,
                path.to_vec(),
                format!("unparseable timestamp {s:?}: {err}"),
            );
            None
        }
    }
}

fn report(
    diagnostics: &mut Vec<Diagnostic>,
    code: DiagnosticCode,
    path: Vec<PathSegment>,
    detail: impl Into<String>,
) {
    let diagnostic = Diagnostic::new(code, path, detail);
    tracing::debug!(
        code = diagnostic.code.name(),
        pointer = %diagnostic.pointer(),
        detail = %diagnostic.detail,
        "field skipped during decode"
    );
    diagnostics.push(diagnostic);
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
