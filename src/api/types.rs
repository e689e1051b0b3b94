//! Wire types for the UP42 REST API.
//!
//! Every UP42 response body wraps its payload in a `data` object. Request
//! bodies use camelCase field names (`parentName`, `blockId`), mapped here
//! via `serde(rename)`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Response body of `POST /oauth/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub data: TokenData,
}

/// Inner payload of the token response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    /// Bearer token for subsequent authorized requests.
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Request body of `POST /projects/{p}/workflows`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRequest {
    pub name: String,
    pub description: String,
}

/// One task descriptor in an add-tasks submission.
///
/// Tasks are submitted as an ordered list; a task with a parent must
/// reference a task that appears earlier in the same list, so the list
/// encodes the dependency chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    pub name: String,
    /// `None` marks a root task; serialized as an explicit JSON `null`.
    #[serde(rename = "parentName")]
    pub parent_name: Option<String>,
    #[serde(rename = "blockId")]
    pub block_id: String,
}

impl TaskRequest {
    /// A task with no parent (first in the chain).
    pub fn root(name: impl Into<String>, block_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_name: None,
            block_id: block_id.into(),
        }
    }

    /// A task depending on an earlier task in the same submission.
    pub fn child(
        name: impl Into<String>,
        parent: impl Into<String>,
        block_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parent_name: Some(parent.into()),
            block_id: block_id.into(),
        }
    }
}

/// Server-side lifecycle state of a job, as reported in `data.status`.
///
/// `SUCCEEDED` is the only terminal-success state. `FAILED`, `ERROR` and
/// `CANCELLED` are terminal failures; everything else (including states this
/// client has never seen) counts as still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    NotStarted,
    Pending,
    Running,
    Cancelling,
    Succeeded,
    Failed,
    Cancelled,
    /// A state string this client does not recognize.
    Unknown,
}

impl JobState {
    /// Map the raw `data.status` string onto a state.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "NOT STARTED" => JobState::NotStarted,
            "PENDING" => JobState::Pending,
            "RUNNING" => JobState::Running,
            "CANCELLING" => JobState::Cancelling,
            "SUCCEEDED" => JobState::Succeeded,
            "FAILED" | "ERROR" => JobState::Failed,
            "CANCELLED" => JobState::Cancelled,
            _ => JobState::Unknown,
        }
    }

    /// True for states the server will never leave with a successful result.
    pub fn is_terminal_failure(&self) -> bool {
        matches!(self, JobState::Failed | JobState::Cancelled)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::NotStarted => write!(f, "NOT STARTED"),
            JobState::Pending => write!(f, "PENDING"),
            JobState::Running => write!(f, "RUNNING"),
            JobState::Cancelling => write!(f, "CANCELLING"),
            JobState::Succeeded => write!(f, "SUCCEEDED"),
            JobState::Failed => write!(f, "FAILED"),
            JobState::Cancelled => write!(f, "CANCELLED"),
            JobState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
