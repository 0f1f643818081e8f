use std::fmt;

use serde::Serialize;

/// Role identifier. Small static vocabulary, so a plain integer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleId(pub i32);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role reference entity: identifier plus human-readable label.
///
/// The label is what ends up inside issued access tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub label: String,
}

/// Transfer shape for the roles listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleView {
    pub id: i32,
    pub label: String,
}

impl From<&Role> for RoleView {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.0,
            label: role.label.clone(),
        }
    }
}
