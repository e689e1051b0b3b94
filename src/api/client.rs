use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::error::Up42Error;
use super::types::{TaskRequest, TokenResponse, WorkflowRequest};

const API_HOST: &str = "https://api.up42.com";

/// Raw result of one endpoint call: the server's status code and body,
/// verbatim. The client never translates status codes or raises on non-2xx;
/// interpreting the outcome is the caller's job.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, Up42Error> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Extract a string field from the `data` envelope, if present.
    pub fn data_str(&self, field: &str) -> Option<String> {
        serde_json::from_str::<Value>(&self.body)
            .ok()?
            .get("data")?
            .get(field)?
            .as_str()
            .map(str::to_string)
    }
}

/// Stateless client for the UP42 workflow and job endpoints.
///
/// Each method maps one logical operation to exactly one outbound request.
/// No retries, no caching; the bearer token is passed explicitly to every
/// authorized call.
pub struct Up42Client {
    client: Client,
    base_url: String,
}

impl Up42Client {
    pub fn new() -> Self {
        Self::with_base_url(API_HOST.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");
        Self { client, base_url }
    }

    /// Exchange project credentials for a bearer token.
    ///
    /// `POST /oauth/token` with client-credential grant semantics. Anything
    /// other than a 200 is an [`Up42Error::AuthFailed`] carrying the status,
    /// so a failed login surfaces here instead of as mysterious 401s on
    /// every later call.
    pub async fn authenticate(
        &self,
        project_id: &str,
        project_secret: &str,
    ) -> Result<String, Up42Error> {
        let url = format!("{}/oauth/token", self.base_url);
        let response = self
            .client
            .post(&url)
            .basic_auth(project_id, Some(project_secret))
            .header("content-type", "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Up42Error::AuthFailed {
                status: status.as_u16(),
            });
        }

        let body = response.json::<TokenResponse>().await?;
        Ok(body.data.access_token)
    }

    /// `POST /projects/{p}/workflows`. Name/description limits are enforced
    /// server-side; nothing is validated locally.
    pub async fn create_workflow(
        &self,
        token: &str,
        project_id: &str,
        name: &str,
        description: &str,
    ) -> Result<ApiResponse, Up42Error> {
        let url = format!("{}/projects/{project_id}/workflows", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&WorkflowRequest {
                name: name.to_string(),
                description: description.to_string(),
            })
            .send()
            .await?;
        Self::read_response(response).await
    }

    /// `GET /projects/{p}/workflows/{w}`.
    pub async fn get_workflow(
        &self,
        token: &str,
        project_id: &str,
        workflow_id: &str,
    ) -> Result<ApiResponse, Up42Error> {
        let url = format!(
            "{}/projects/{project_id}/workflows/{workflow_id}",
            self.base_url
        );
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        Self::read_response(response).await
    }

    /// `DELETE /projects/{p}/workflows/{w}`. Deleting a workflow that is
    /// already gone yields the server's not-found response, not an error.
    pub async fn delete_workflow(
        &self,
        token: &str,
        project_id: &str,
        workflow_id: &str,
    ) -> Result<ApiResponse, Up42Error> {
        let url = format!(
            "{}/projects/{project_id}/workflows/{workflow_id}",
            self.base_url
        );
        let response = self.client.delete(&url).bearer_auth(token).send().await?;
        Self::read_response(response).await
    }

    /// `POST /projects/{p}/workflows/{w}/tasks` with an ordered task list.
    /// The list order encodes the dependency chain; no schema validation
    /// happens client-side.
    pub async fn add_tasks(
        &self,
        token: &str,
        project_id: &str,
        workflow_id: &str,
        tasks: &[TaskRequest],
    ) -> Result<ApiResponse, Up42Error> {
        let url = format!(
            "{}/projects/{project_id}/workflows/{workflow_id}/tasks",
            self.base_url
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&tasks)
            .send()
            .await?;
        Self::read_response(response).await
    }

    /// `POST /projects/{p}/workflows/{w}/jobs`. The job configuration is an
    /// external schema, passed through opaque.
    pub async fn create_and_run_job(
        &self,
        token: &str,
        project_id: &str,
        workflow_id: &str,
        job_config: &Value,
    ) -> Result<ApiResponse, Up42Error> {
        let url = format!(
            "{}/projects/{project_id}/workflows/{workflow_id}/jobs",
            self.base_url
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(job_config)
            .send()
            .await?;
        Self::read_response(response).await
    }

    /// `GET /projects/{p}/jobs/{j}`. A 200 body carries `data.status`.
    pub async fn check_job_status(
        &self,
        token: &str,
        project_id: &str,
        job_id: &str,
    ) -> Result<ApiResponse, Up42Error> {
        let url = format!("{}/projects/{project_id}/jobs/{job_id}", self.base_url);
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        Self::read_response(response).await
    }

    async fn read_response(response: reqwest::Response) -> Result<ApiResponse, Up42Error> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

impl Default for Up42Client {
    fn default() -> Self {
        Self::new()
    }
}
