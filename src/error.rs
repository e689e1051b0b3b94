use thiserror::Error;

use crate::api::Up42Error;

#[derive(Debug, Error)]
pub enum QaError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("UP42 API error: {0}")]
    Api(#[from] Up42Error),

    /// A scenario step got a status code it cannot proceed from
    /// (e.g. workflow creation answering 401).
    #[error("{operation} returned unexpected status {status}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    /// A response was missing a field the scenario needs, such as the
    /// workflow id of a freshly created workflow.
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
