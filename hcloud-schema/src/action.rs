use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Running,
    Success,
    Error,
}

/// An asynchronous operation started by a mutating API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: i64,
    pub status: ActionStatus,
    pub command: String,
    pub progress: u8,
    pub started: DateTime<Utc>,
    pub finished: Option<DateTime<Utc>>,
    pub error: Option<ActionError>,
    #[serde(default)]
    pub resources: Vec<ActionResourceReference>,
}

impl Action {
    pub fn is_finished(&self) -> bool {
        self.status != ActionStatus::Running
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResourceReference {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body returned by `GET /actions/{id}` and by every load balancer action
/// endpoint: a single wrapped [`Action`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: Action,
}

pub type ActionGetResponse = ActionResponse;
