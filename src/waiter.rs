//! Bounded polling for job completion.
//!
//! [`JobWaiter`] re-polls the job-status endpoint at a fixed interval until
//! the job reaches a terminal state or the caller's deadline passes. No
//! backoff: this is retry-until-deadline, not retry-with-backoff.

use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::api::{JobState, Up42Client};

/// Fixed pause between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// How a wait ended. Distinguishes "the job never finished" from "we could
/// not reach or understand the service", which a plain boolean conflates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The job reached `SUCCEEDED`.
    Succeeded,
    /// The job reached a terminal failure state before the deadline.
    Failed(JobState),
    /// The deadline passed with the job still in a non-terminal state.
    TimedOut,
    /// A request or parse failure interrupted polling.
    TransportError(String),
}

impl WaitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, WaitOutcome::Succeeded)
    }
}

impl std::fmt::Display for WaitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaitOutcome::Succeeded => write!(f, "SUCCEEDED"),
            WaitOutcome::Failed(state) => write!(f, "FAILED ({state})"),
            WaitOutcome::TimedOut => write!(f, "TIMED OUT"),
            WaitOutcome::TransportError(detail) => write!(f, "TRANSPORT ERROR: {detail}"),
        }
    }
}

/// Polls a single job to completion, single-threaded and blocking the
/// calling task between polls.
pub struct JobWaiter<'a> {
    client: &'a Up42Client,
    poll_interval: Duration,
}

impl<'a> JobWaiter<'a> {
    pub fn new(client: &'a Up42Client) -> Self {
        Self::with_poll_interval(client, DEFAULT_POLL_INTERVAL)
    }

    /// Waiter with a custom poll interval (short intervals keep tests fast).
    pub fn with_poll_interval(client: &'a Up42Client, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
        }
    }

    /// Poll the job until it succeeds, fails, or `max_wait` elapses.
    ///
    /// Contract: the elapsed-time check runs at the top of the loop, before
    /// each status request. A `max_wait` of zero therefore returns
    /// [`WaitOutcome::TimedOut`] without issuing a single poll.
    ///
    /// Request and parse failures are never propagated; they end the wait
    /// with [`WaitOutcome::TransportError`]. A terminal failure state
    /// reported by the server ends the wait immediately instead of burning
    /// the rest of the deadline.
    pub async fn wait_until_complete(
        &self,
        token: &str,
        project_id: &str,
        job_id: &str,
        max_wait: Duration,
    ) -> WaitOutcome {
        let started = Instant::now();

        loop {
            if started.elapsed() >= max_wait {
                return WaitOutcome::TimedOut;
            }

            let response = match self.client.check_job_status(token, project_id, job_id).await {
                Ok(response) => response,
                Err(e) => return WaitOutcome::TransportError(e.to_string()),
            };

            let state = match response.data_str("status") {
                Some(raw) => JobState::parse(&raw),
                None => {
                    return WaitOutcome::TransportError(format!(
                        "no job status in response (HTTP {})",
                        response.status
                    ));
                }
            };

            if state == JobState::Succeeded {
                return WaitOutcome::Succeeded;
            }
            if state.is_terminal_failure() {
                return WaitOutcome::Failed(state);
            }

            // Unknown states count as still in flight and keep polling.
            sleep(self.poll_interval).await;
        }
    }
}
