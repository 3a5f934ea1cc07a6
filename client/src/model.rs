use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display label, e.g. "Not Started".
    pub status: String,
    #[serde(default)]
    pub client: Option<Client>,
}

/// Wire form of the `ProjectStatus` enum argument.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Fields left as `None` are not changed by `updateProject`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}
