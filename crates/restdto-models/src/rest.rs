//! rest family — request and response envelopes.

use restdto_schema::{RecordSchema, SchemaBuilder};

pub fn models() -> Vec<RecordSchema> {
    vec![
        rest_delete_job_result(),
        rest_delete_nodes_request(),
        rest_delete_nodes_response(),
        rest_error(),
    ]
}

/// One background deletion job spawned by a delete-nodes call.
pub fn rest_delete_job_result() -> RecordSchema {
    let b = SchemaBuilder::new();
    b.record(
        "RestDeleteJobResult",
        vec![b.field("Uuid", b.str()), b.field("Label", b.str())],
    )
}

pub fn rest_delete_nodes_request() -> RecordSchema {
    let b = SchemaBuilder::new();
    b.record(
        "RestDeleteNodesRequest",
        vec![
            b.field("Nodes", b.list(b.ref_("TreeNode"))),
            b.field("Recursive", b.bool()),
        ],
    )
}

pub fn rest_delete_nodes_response() -> RecordSchema {
    let b = SchemaBuilder::new();
    b.record(
        "RestDeleteNodesResponse",
        vec![b.field("DeleteJobs", b.list(b.ref_("RestDeleteJobResult")))],
    )
}

pub fn rest_error() -> RecordSchema {
    let b = SchemaBuilder::new();
    b.record(
        "RestError",
        vec![
            b.field("Code", b.num()),
            b.field("Title", b.str()),
            b.field("Detail", b.str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use restdto_schema::FieldType;

    #[test]
    fn delete_jobs_is_a_list_of_job_results() {
        let schema = rest_delete_nodes_response();
        assert_eq!(
            schema.field("DeleteJobs").unwrap().type_,
            FieldType::List(Box::new(FieldType::Ref("RestDeleteJobResult".into())))
        );
    }

    #[test]
    fn job_result_keys_match_the_wire() {
        let schema = rest_delete_job_result();
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["Uuid", "Label"]);
    }
}
