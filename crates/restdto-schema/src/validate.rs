//! Schema integrity validator.

use std::collections::HashSet;

use super::schema::{FieldType, RecordSchema};

/// Validate a record schema for structural integrity.
///
/// Returns `Ok(())` if the schema is valid, or `Err(code)` with a short
/// upper-case error code.
pub fn validate_schema(schema: &RecordSchema) -> Result<(), String> {
    if schema.name.is_empty() {
        return Err("NAME_EMPTY".into());
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for field in &schema.fields {
        if field.key.is_empty() {
            return Err("KEY_EMPTY".into());
        }
        if !seen.insert(field.key.as_str()) {
            return Err("KEY_DUP".into());
        }
        validate_type(&field.type_)?;
    }
    Ok(())
}

fn validate_type(type_: &FieldType) -> Result<(), String> {
    match type_ {
        FieldType::Str
        | FieldType::Num
        | FieldType::Bool
        | FieldType::Date
        | FieldType::Any => Ok(()),
        FieldType::Ref(name) => {
            if name.is_empty() {
                return Err("REF_EMPTY".into());
            }
            Ok(())
        }
        FieldType::List(elem) => validate_type(elem),
        FieldType::Map(value) => validate_type(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SchemaBuilder;

    fn b() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    #[test]
    fn validate_simple_record_ok() {
        let schema = b().record(
            "RestDeleteJobResult",
            vec![b().field("Uuid", b().str()), b().field("Label", b().str())],
        );
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn validate_empty_record_name_err() {
        let schema = b().record("", vec![b().field("Uuid", b().str())]);
        assert_eq!(validate_schema(&schema), Err("NAME_EMPTY".into()));
    }

    #[test]
    fn validate_empty_field_key_err() {
        let schema = b().record("X", vec![b().field("", b().str())]);
        assert_eq!(validate_schema(&schema), Err("KEY_EMPTY".into()));
    }

    #[test]
    fn validate_duplicate_field_key_err() {
        let schema = b().record(
            "X",
            vec![b().field("Uuid", b().str()), b().field("Uuid", b().num())],
        );
        assert_eq!(validate_schema(&schema), Err("KEY_DUP".into()));
    }

    #[test]
    fn validate_empty_ref_target_err() {
        let schema = b().record("X", vec![b().field("Role", b().ref_(""))]);
        assert_eq!(validate_schema(&schema), Err("REF_EMPTY".into()));
    }

    #[test]
    fn validate_recurses_into_containers() {
        let schema = b().record("X", vec![b().field("Roles", b().list(b().ref_("")))]);
        assert_eq!(validate_schema(&schema), Err("REF_EMPTY".into()));

        let schema = b().record("X", vec![b().field("Meta", b().map(b().ref_("")))]);
        assert_eq!(validate_schema(&schema), Err("REF_EMPTY".into()));
    }

    #[test]
    fn validate_deeply_nested_ok() {
        let schema = b().record(
            "RestDeleteNodesResponse",
            vec![b().field("DeleteJobs", b().list(b().ref_("RestDeleteJobResult")))],
        );
        assert!(validate_schema(&schema).is_ok());
    }
}
