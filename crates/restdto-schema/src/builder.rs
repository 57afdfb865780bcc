//! Schema builder.
//!
//! Provides a fluent API for constructing field types and record schemas, so
//! model definitions read as close to the wire documentation as possible.

use super::schema::{FieldSchema, FieldType, RecordSchema};

/// Builder for constructing schema values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder;

impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn str(&self) -> FieldType {
        FieldType::Str
    }

    pub fn num(&self) -> FieldType {
        FieldType::Num
    }

    pub fn bool(&self) -> FieldType {
        FieldType::Bool
    }

    pub fn date(&self) -> FieldType {
        FieldType::Date
    }

    pub fn any(&self) -> FieldType {
        FieldType::Any
    }

    pub fn ref_(&self, name: impl Into<String>) -> FieldType {
        FieldType::Ref(name.into())
    }

    pub fn list(&self, elem: FieldType) -> FieldType {
        FieldType::List(Box::new(elem))
    }

    pub fn map(&self, value: FieldType) -> FieldType {
        FieldType::Map(Box::new(value))
    }

    pub fn field(&self, key: impl Into<String>, type_: FieldType) -> FieldSchema {
        FieldSchema::new(key, type_)
    }

    pub fn record(&self, name: impl Into<String>, fields: Vec<FieldSchema>) -> RecordSchema {
        RecordSchema::new(name, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_constructs_nested_types() {
        let b = SchemaBuilder::new();
        let t = b.list(b.ref_("RestDeleteJobResult"));
        assert_eq!(
            t,
            FieldType::List(Box::new(FieldType::Ref("RestDeleteJobResult".into())))
        );
    }

    #[test]
    fn builder_constructs_records() {
        let b = SchemaBuilder::new();
        let schema = b.record(
            "IdmRole",
            vec![
                b.field("Uuid", b.str()),
                b.field("Label", b.str()),
                b.field("IsTeam", b.bool()),
            ],
        );
        assert_eq!(schema.name, "IdmRole");
        assert_eq!(schema.fields.len(), 3);
        assert_eq!(schema.field("IsTeam").unwrap().type_, FieldType::Bool);
    }

    #[test]
    fn builder_map_of_str() {
        let b = SchemaBuilder::new();
        assert_eq!(b.map(b.str()), FieldType::Map(Box::new(FieldType::Str)));
    }
}
