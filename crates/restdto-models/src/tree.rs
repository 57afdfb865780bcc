//! tree family — file tree entities.

use restdto_schema::{RecordSchema, SchemaBuilder};

pub fn models() -> Vec<RecordSchema> {
    vec![tree_node()]
}

/// A node of the file tree. `MetaStore` values arrive JSON-encoded inside
/// strings, so the map is declared as string-valued and left to callers to
/// unwrap.
pub fn tree_node() -> RecordSchema {
    let b = SchemaBuilder::new();
    b.record(
        "TreeNode",
        vec![
            b.field("Uuid", b.str()),
            b.field("Path", b.str()),
            b.field("Type", b.str()),
            b.field("Size", b.num()),
            b.field("MTime", b.num()),
            b.field("Etag", b.str()),
            b.field("MetaStore", b.map(b.str())),
        ],
    )
}
