use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaResponse {
    pub id: String,
    pub idea: String,
    pub description: String,
    pub created: String,
    pub updated: String,
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
