/// Declared wire type of a single record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// JSON string.
    Str,
    /// JSON number.
    Num,
    /// JSON boolean.
    Bool,
    /// RFC 3339 timestamp carried as a JSON string.
    Date,
    /// Opaque pass-through; the value is kept as-is.
    Any,
    /// Reference to another named record schema.
    Ref(String),
    /// Ordered sequence with a homogeneous element type.
    List(Box<FieldType>),
    /// String-keyed mapping with a homogeneous value type.
    Map(Box<FieldType>),
}

impl FieldType {
    /// Returns the "kind" string identifier for this field type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Num => "num",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Any => "any",
            Self::Ref(_) => "ref",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Str | Self::Num | Self::Bool | Self::Date)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }
}

/// One declared field of a record: the case-sensitive wire key plus its type.
///
/// Wire keys match the server's casing exactly (commonly capitalized, e.g.
/// `Uuid`, `Label`).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub key: String,
    pub type_: FieldType,
}

impl FieldSchema {
    pub fn new(key: impl Into<String>, type_: FieldType) -> Self {
        Self {
            key: key.into(),
            type_,
        }
    }
}

/// A named wire entity with a fixed, ordered, closed set of fields.
///
/// The field set is closed: payload keys with no matching declaration are
/// ignored by the marshaller and never round-tripped.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<FieldSchema>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Look up a field declaration by wire key.
    pub fn field(&self, key: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Declared wire keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_kind_returns_correct_strings() {
        assert_eq!(FieldType::Str.kind(), "str");
        assert_eq!(FieldType::Num.kind(), "num");
        assert_eq!(FieldType::Bool.kind(), "bool");
        assert_eq!(FieldType::Date.kind(), "date");
        assert_eq!(FieldType::Any.kind(), "any");
        assert_eq!(FieldType::Ref("IdmRole".into()).kind(), "ref");
        assert_eq!(FieldType::List(Box::new(FieldType::Str)).kind(), "list");
        assert_eq!(FieldType::Map(Box::new(FieldType::Str)).kind(), "map");
    }

    #[test]
    fn field_type_is_primitive() {
        assert!(FieldType::Str.is_primitive());
        assert!(FieldType::Num.is_primitive());
        assert!(FieldType::Bool.is_primitive());
        assert!(FieldType::Date.is_primitive());
        assert!(!FieldType::Any.is_primitive());
        assert!(!FieldType::Ref("X".into()).is_primitive());
        assert!(!FieldType::List(Box::new(FieldType::Num)).is_primitive());
    }

    #[test]
    fn field_type_is_container() {
        assert!(FieldType::List(Box::new(FieldType::Str)).is_container());
        assert!(FieldType::Map(Box::new(FieldType::Any)).is_container());
        assert!(!FieldType::Str.is_container());
        assert!(!FieldType::Ref("X".into()).is_container());
    }

    #[test]
    fn record_schema_field_lookup_is_case_sensitive() {
        let schema = RecordSchema::new(
            "RestDeleteJobResult",
            vec![
                FieldSchema::new("Uuid", FieldType::Str),
                FieldSchema::new("Label", FieldType::Str),
            ],
        );
        assert!(schema.has_field("Uuid"));
        assert!(!schema.has_field("uuid"));
        assert_eq!(schema.field("Label").unwrap().type_, FieldType::Str);
        assert!(schema.field("Missing").is_none());
    }

    #[test]
    fn record_schema_keys_preserve_declaration_order() {
        let schema = RecordSchema::new(
            "TreeNode",
            vec![
                FieldSchema::new("Uuid", FieldType::Str),
                FieldSchema::new("Path", FieldType::Str),
                FieldSchema::new("Size", FieldType::Num),
            ],
        );
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["Uuid", "Path", "Size"]);
    }
}
