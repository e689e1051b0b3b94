pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiResponse, Up42Client};
pub use error::Up42Error;
pub use types::{JobState, TaskRequest, TokenResponse, WorkflowRequest};
