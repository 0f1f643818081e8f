use serde::Serialize;

/// Priority vocabulary entry. Read-mostly reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Priority {
    pub code: i32,
    pub description: String,
}

/// Status vocabulary entry.
///
/// Besides feeding listings, this table backs the validation of request
/// status transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: i32,
    pub description: String,
}

/// Transfer shape shared by both vocabulary listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeView {
    pub code: i32,
    pub description: String,
}

impl From<&Priority> for CodeView {
    fn from(priority: &Priority) -> Self {
        Self {
            code: priority.code,
            description: priority.description.clone(),
        }
    }
}

impl From<&Status> for CodeView {
    fn from(status: &Status) -> Self {
        Self {
            code: status.code,
            description: status.description.clone(),
        }
    }
}
