//! Integration-test client for the UP42 workflow and job API.
//!
//! The crate centers on two pieces: [`api::Up42Client`], a stateless mapping
//! of each remote operation onto a single HTTP request, and
//! [`waiter::JobWaiter`], a bounded fixed-interval polling loop for job
//! completion. [`smoke::SmokeRunner`] sequences them into the end-to-end
//! scenario the `up42-qa` binary runs.

pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod smoke;
pub mod ui;
pub mod waiter;

pub use api::{ApiResponse, JobState, TaskRequest, Up42Client, Up42Error};
pub use config::Up42Config;
pub use error::QaError;
pub use waiter::{JobWaiter, WaitOutcome};
