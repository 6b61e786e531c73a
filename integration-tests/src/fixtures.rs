//! Responses captured from Graph v1.0 for a test tenant, trimmed to the
//! properties this crate models plus a few it does not.

pub const SITE: &str = include_str!("../tests/fixtures/site.json");
pub const DRIVES: &str = include_str!("../tests/fixtures/drives.json");
pub const ROOT_CHILDREN: &str = include_str!("../tests/fixtures/root_children.json");
