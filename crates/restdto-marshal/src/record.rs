//! Typed in-memory records.
//!
//! A [`Record`] is the schema-conformant representation of one wire entity.
//! Fields are genuinely absent until populated: a fresh record holds no
//! values at all, and a field skipped during decoding stays unset rather
//! than defaulting to null, zero, or an empty string. UI code reading a
//! partially populated record should treat `None` as "unknown", never as a
//! fabricated value.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use restdto_schema::{FieldType, RecordSchema};
use serde_json::Value;

use crate::error::MarshalError;

/// A populated field value, mirroring the [`FieldType`] algebra.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Date(DateTime<Utc>),
    Any(Value),
    Record(Record),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Returns the "kind" string identifier, aligned with
    /// [`FieldType::kind`].
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Num(_) => "num",
            Self::Bool(_) => "bool",
            Self::Date(_) => "date",
            Self::Any(_) => "any",
            Self::Record(_) => "ref",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Whether this value may be stored under the given declared type.
    ///
    /// The check is shallow by design: container elements and nested record
    /// fields were themselves type-checked when they were constructed.
    fn conforms_to(&self, type_: &FieldType) -> bool {
        match type_ {
            FieldType::Any => true,
            FieldType::Ref(name) => {
                matches!(self, Self::Record(r) if r.schema().name == *name)
            }
            _ => self.kind() == type_.kind(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A typed record instance for one conversion or one request body.
///
/// Created fresh per conversion call; it has no identity beyond the call
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<RecordSchema>,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// A record with every field absent.
    pub fn new(schema: Arc<RecordSchema>) -> Self {
        Self {
            schema,
            fields: BTreeMap::new(),
        }
    }

    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn is_absent(&self, key: &str) -> bool {
        !self.fields.contains_key(key)
    }

    /// Present wire keys, in schema declaration order.
    pub fn present_keys(&self) -> Vec<&str> {
        self.schema
            .keys()
            .filter(|k| self.fields.contains_key(*k))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Set a declared field. Undeclared keys and values whose shape
    /// contradicts the declaration are programming errors and fail hard.
    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<(), MarshalError> {
        let value = value.into();
        let field = self
            .schema
            .field(key)
            .ok_or_else(|| MarshalError::UnknownField {
                record: self.schema.name.clone(),
                key: key.to_string(),
            })?;
        if !value.conforms_to(&field.type_) {
            return Err(MarshalError::TypeMismatch {
                record: self.schema.name.clone(),
                key: key.to_string(),
                expected: field.type_.kind(),
                actual: value.kind(),
            });
        }
        self.fields.insert(key.to_string(), value);
        Ok(())
    }

    /// Make a field absent again. Unknown keys are a no-op.
    pub fn unset(&mut self, key: &str) {
        self.fields.remove(key);
    }

    // Typed accessors. Each returns `None` when the field is absent or (for
    // `Any`-typed fields holding arbitrary data) not of the accessed shape.

    pub fn str_field(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(FieldValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn num_field(&self, key: &str) -> Option<f64> {
        match self.fields.get(key) {
            Some(FieldValue::Num(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        match self.fields.get(key) {
            Some(FieldValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn date_field(&self, key: &str) -> Option<&DateTime<Utc>> {
        match self.fields.get(key) {
            Some(FieldValue::Date(d)) => Some(d),
            _ => None,
        }
    }

    pub fn any_field(&self, key: &str) -> Option<&Value> {
        match self.fields.get(key) {
            Some(FieldValue::Any(v)) => Some(v),
            _ => None,
        }
    }

    pub fn record_field(&self, key: &str) -> Option<&Record> {
        match self.fields.get(key) {
            Some(FieldValue::Record(r)) => Some(r),
            _ => None,
        }
    }

    pub fn list_field(&self, key: &str) -> Option<&[FieldValue]> {
        match self.fields.get(key) {
            Some(FieldValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn map_field(&self, key: &str) -> Option<&BTreeMap<String, FieldValue>> {
        match self.fields.get(key) {
            Some(FieldValue::Map(m)) => Some(m),
            _ => None,
        }
    }

    /// Insert without the declaration check. Decoder-internal: the decoder
    /// only produces values it derived from the schema itself.
    pub(crate) fn insert_unchecked(&mut self, key: String, value: FieldValue) {
        self.fields.insert(key, value);
    }
}
