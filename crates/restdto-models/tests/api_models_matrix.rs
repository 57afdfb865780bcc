use restdto_marshal::{FieldValue, Marshaller, Record};
use restdto_models::default_registry;
use serde_json::json;

fn marshaller() -> Marshaller {
    Marshaller::new(default_registry())
}

#[test]
fn delete_nodes_response_decodes_from_the_wire_matrix() {
    let m = marshaller();
    let decoded = m
        .from_named(
            "RestDeleteNodesResponse",
            &json!({"DeleteJobs": [
                {"Uuid": "job-1", "Label": "Deleting /common/a"},
                {"Uuid": "job-2", "Label": "Deleting /common/b"},
            ]}),
        )
        .unwrap();
    assert!(decoded.diagnostics.is_empty());
    let jobs = decoded.record.list_field("DeleteJobs").unwrap();
    assert_eq!(jobs.len(), 2);
    let FieldValue::Record(first) = &jobs[0] else {
        panic!("expected nested record");
    };
    assert_eq!(first.str_field("Uuid"), Some("job-1"));
}

#[test]
fn delete_nodes_request_builds_and_encodes_matrix() {
    let m = marshaller();
    let node_schema = m.registry().resolve("TreeNode").unwrap();
    let mut node = Record::new(node_schema);
    node.set("Path", "/common/report.pdf").unwrap();

    let req_schema = m.registry().resolve("RestDeleteNodesRequest").unwrap();
    let mut request = Record::new(req_schema);
    request
        .set("Nodes", FieldValue::List(vec![FieldValue::Record(node)]))
        .unwrap();
    request.set("Recursive", true).unwrap();

    assert_eq!(
        m.to_payload(&request),
        json!({"Nodes": [{"Path": "/common/report.pdf"}], "Recursive": true})
    );
}

#[test]
fn role_creation_body_matches_the_admin_form_matrix() {
    // The role/group creation form fills Uuid and Label and submits; teams
    // additionally set IsTeam.
    let m = marshaller();
    let schema = m.registry().resolve("IdmRole").unwrap();
    let mut role = Record::new(schema);
    role.set("Uuid", "finance").unwrap();
    role.set("Label", "Finance").unwrap();
    role.set("IsTeam", false).unwrap();
    assert_eq!(
        m.to_payload(&role),
        json!({"Uuid": "finance", "Label": "Finance", "IsTeam": false})
    );
}

#[test]
fn skewed_server_payload_degrades_gracefully_matrix() {
    // A server ahead of this client: extra fields are dropped, a malformed
    // one is reported, everything declared-and-valid is kept.
    let m = marshaller();
    let decoded = m
        .from_named(
            "IdmUser",
            &json!({
                "Uuid": "u-1",
                "Login": "jdoe",
                "IsGroup": false,
                "Roles": [{"Uuid": "admin", "Label": "Administrator"}],
                "Attributes": {"profile": "standard", "displayName": "J. Doe"},
                "LockStatus": "none",
                "Policies": [{"Action": "READ"}],
                "GroupPath": 7,
                "GroupLabel": ["not", "a", "label"],
            }),
        )
        .unwrap();
    assert_eq!(decoded.record.str_field("Login"), Some("jdoe"));
    assert_eq!(decoded.record.str_field("GroupPath"), Some("7"));
    let roles = decoded.record.list_field("Roles").unwrap();
    assert_eq!(roles.len(), 1);
    assert!(decoded.record.is_absent("GroupLabel"));
    assert_eq!(decoded.diagnostics.len(), 1);
    assert_eq!(decoded.diagnostics[0].pointer(), "/GroupLabel");
    assert!(decoded.record.is_absent("Password"));

    let out = m.to_payload(&decoded.record);
    let obj = out.as_object().unwrap();
    assert!(!obj.contains_key("LockStatus"));
    assert!(!obj.contains_key("Policies"));
}

#[test]
fn tree_node_meta_store_roundtrip_matrix() {
    let m = marshaller();
    let payload = json!({
        "Uuid": "n-1",
        "Path": "/common/report.pdf",
        "Type": "LEAF",
        "Size": 40960,
        "MTime": 1690000000,
        "Etag": "d41d8cd9",
        "MetaStore": {"ws_label": "\"Common\"", "name": "\"report.pdf\""},
    });
    let decoded = m.from_named("TreeNode", &payload).unwrap();
    assert!(decoded.diagnostics.is_empty());
    assert_eq!(decoded.record.num_field("Size"), Some(40960.0));
    assert_eq!(m.to_payload(&decoded.record), payload);
}
