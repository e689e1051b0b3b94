use thiserror::Error;

/// Errors that can occur while talking to the UP42 API.
///
/// Non-2xx responses from workflow/task/job endpoints are *not* errors —
/// they come back to the caller as ordinary [`ApiResponse`](super::ApiResponse)
/// values with the server's status code intact. Only the token endpoint and
/// the transport/parse layer produce error values.
#[derive(Debug, Error)]
pub enum Up42Error {
    /// The token endpoint answered with something other than 200.
    /// Carries the HTTP status so a failed login is not mistaken for a
    /// downstream 401 later in the session.
    #[error("authentication failed with status {status}")]
    AuthFailed { status: u16 },

    /// Underlying network failure (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}
