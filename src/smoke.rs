//! End-to-end smoke scenario against a live (or mocked) UP42 project.
//!
//! Sequence: authenticate, create a throwaway workflow, verify it exists,
//! attach the MODIS + sharpening task chain, create and run a job, wait for
//! completion, and tear the workflow down. Teardown runs even when an
//! earlier step fails.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{ApiResponse, Up42Client};
use crate::config::Up42Config;
use crate::error::QaError;
use crate::fixtures;
use crate::waiter::{JobWaiter, WaitOutcome};

/// Drives the smoke scenario and produces a [`SmokeReport`].
pub struct SmokeRunner<'a> {
    client: &'a Up42Client,
    config: &'a Up42Config,
}

/// Structured record of one smoke run.
#[derive(Debug, Clone, Serialize)]
pub struct SmokeReport {
    pub workflow_id: String,
    pub job_id: String,
    pub job_outcome: String,
    pub job_succeeded: bool,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl<'a> SmokeRunner<'a> {
    pub fn new(client: &'a Up42Client, config: &'a Up42Config) -> Self {
        Self { client, config }
    }

    /// Run the full scenario. Fails fast on any step that cannot proceed
    /// (bad credentials, unexpected status), but always attempts to delete
    /// the workflow it created.
    pub async fn run(&self) -> Result<SmokeReport, QaError> {
        self.config.require_credentials()?;
        let started_at = Utc::now();

        let token = self
            .client
            .authenticate(&self.config.project_id, &self.config.project_api_key)
            .await?;

        let name = fixtures::random_alphanumeric(5);
        let description = fixtures::random_alphanumeric(5);
        let response = self
            .client
            .create_workflow(&token, &self.config.project_id, &name, &description)
            .await?;
        expect_status("create workflow", &response, 200)?;
        let workflow_id = response
            .data_str("id")
            .ok_or(QaError::MissingField("data.id"))?;

        let result = self.exercise_workflow(&token, &workflow_id).await;

        // Cleanup regardless of how the scenario went; a not-found here is
        // as good as a successful delete.
        let _ = self
            .client
            .delete_workflow(&token, &self.config.project_id, &workflow_id)
            .await;

        let (job_id, outcome) = result?;
        let completed_at = Utc::now();
        Ok(SmokeReport {
            workflow_id,
            job_id,
            job_outcome: outcome.to_string(),
            job_succeeded: outcome.is_success(),
            started_at,
            completed_at,
            duration_ms: (completed_at - started_at).num_milliseconds(),
        })
    }

    async fn exercise_workflow(
        &self,
        token: &str,
        workflow_id: &str,
    ) -> Result<(String, WaitOutcome), QaError> {
        let project_id = &self.config.project_id;

        let response = self
            .client
            .get_workflow(token, project_id, workflow_id)
            .await?;
        expect_status("get workflow", &response, 200)?;

        let tasks = fixtures::modis_sharpening_tasks();
        let response = self
            .client
            .add_tasks(token, project_id, workflow_id, &tasks)
            .await?;
        expect_status("add tasks", &response, 200)?;

        let job_config = fixtures::modis_sharpening_job_config();
        let response = self
            .client
            .create_and_run_job(token, project_id, workflow_id, &job_config)
            .await?;
        expect_status("create and run job", &response, 200)?;
        let job_id = response
            .data_str("id")
            .ok_or(QaError::MissingField("data.id"))?;

        let waiter = JobWaiter::with_poll_interval(
            self.client,
            Duration::from_secs(self.config.poll_interval_secs),
        );
        let outcome = waiter
            .wait_until_complete(
                token,
                project_id,
                &job_id,
                Duration::from_secs(self.config.job_timeout_secs),
            )
            .await;

        Ok((job_id, outcome))
    }
}

fn expect_status(
    operation: &'static str,
    response: &ApiResponse,
    expected: u16,
) -> Result<(), QaError> {
    if response.status != expected {
        return Err(QaError::UnexpectedStatus {
            operation,
            status: response.status,
        });
    }
    Ok(())
}
