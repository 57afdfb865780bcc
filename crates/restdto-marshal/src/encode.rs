//! Record encoding — `to_payload`.
//!
//! Emits a JSON object containing exactly the present fields of a record.
//! Absent fields produce no key at all (never `null`), so a round-tripped
//! payload carries only the declared keys that actually held data. Encoding
//! is infallible: records are well-typed by construction.

use serde_json::{Map, Number, Value};

use crate::decode::Marshaller;
use crate::record::{FieldValue, Record};

impl Marshaller {
    /// Encode a record back into a raw payload.
    ///
    /// Keys are emitted in schema declaration order; the wire format itself
    /// is key-based, so consumers must not rely on position.
    pub fn to_payload(&self, record: &Record) -> Value {
        encode_record(record)
    }
}

fn encode_record(record: &Record) -> Value {
    let mut out = Map::new();
    for field in &record.schema().fields {
        if let Some(value) = record.get(&field.key) {
            out.insert(field.key.clone(), encode_value(value));
        }
    }
    Value::Object(out)
}

fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Str(s) => Value::String(s.clone()),
        FieldValue::Num(n) => encode_num(*n),
        FieldValue::Bool(b) => Value::Bool(*b),
        FieldValue::Date(dt) => Value::String(dt.to_rfc3339()),
        FieldValue::Any(v) => v.clone(),
        FieldValue::Record(r) => encode_record(r),
        FieldValue::List(items) => Value::Array(items.iter().map(encode_value).collect()),
        FieldValue::Map(entries) => {
            let mut out = Map::new();
            for (key, item) in entries {
                out.insert(key.clone(), encode_value(item));
            }
            Value::Object(out)
        }
    }
}

// Integral values re-emit as JSON integers so that a decoded `40960` does
// not come back as `40960.0`.
fn encode_num(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
