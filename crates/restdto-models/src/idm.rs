//! idm family — identity management entities (roles, users, groups).

use restdto_schema::{RecordSchema, SchemaBuilder};

pub fn models() -> Vec<RecordSchema> {
    vec![idm_role(), idm_user()]
}

/// A role, team, or group ACL holder. Teams and group roles are regular
/// roles with the corresponding flag set.
pub fn idm_role() -> RecordSchema {
    let b = SchemaBuilder::new();
    b.record(
        "IdmRole",
        vec![
            b.field("Uuid", b.str()),
            b.field("Label", b.str()),
            b.field("IsTeam", b.bool()),
            b.field("GroupRole", b.bool()),
            b.field("UserRole", b.bool()),
            b.field("LastUpdated", b.num()),
            b.field("AutoApplies", b.list(b.str())),
            b.field("ForceOverride", b.bool()),
        ],
    )
}

/// A user or group node in the identity tree. Groups carry `IsGroup` plus a
/// `GroupLabel`; users hang off a `GroupPath`.
pub fn idm_user() -> RecordSchema {
    let b = SchemaBuilder::new();
    b.record(
        "IdmUser",
        vec![
            b.field("Uuid", b.str()),
            b.field("Login", b.str()),
            b.field("Password", b.str()),
            b.field("GroupPath", b.str()),
            b.field("GroupLabel", b.str()),
            b.field("IsGroup", b.bool()),
            b.field("Attributes", b.map(b.str())),
            b.field("Roles", b.list(b.ref_("IdmRole"))),
        ],
    )
}
