//! Surveyor Workspace Client
//!
//! A type-safe HTTP client for the workspace control plane's jobs API.
//!
//! This is the only component of the system that talks to the network: it
//! submits `run-now` requests for the survey-processing job and interprets
//! the responses. Each failure class (authentication, unknown job, server
//! fault, transport, malformed body) surfaces as its own error kind.
//!
//! # Example
//!
//! ```no_run
//! use surveyor_client::WorkspaceClient;
//! use surveyor_core::domain::region::RegionSet;
//! use surveyor_core::domain::run::RunRequest;
//! use surveyor_core::domain::target::JobTarget;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = WorkspaceClient::new(
//!         "https://dbc-45210aa6-83e8.cloud.databricks.com",
//!         "dapi-secret-token",
//!     );
//!
//!     let request = RunRequest::parse("2024-11-05", "EU", &RegionSet::default())?;
//!     let target = JobTarget {
//!         workspace_url: "https://dbc-45210aa6-83e8.cloud.databricks.com".to_string(),
//!         job_id: 860716632182514,
//!         org_id: "4924241215537505".to_string(),
//!     };
//!
//!     let submission = client.trigger(&target, &request).await?;
//!     println!("Started run {}: {}", submission.run_id, submission.run_url);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
pub mod run_url;

// Re-export commonly used types
pub use error::{ClientError, ConfigError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the workspace control plane
///
/// Holds the workspace base URL, the bearer token, and a reqwest client.
/// Stateless apart from its configuration: instances are cheap to clone and
/// safe to use from multiple tasks, and every call is independent.
#[derive(Clone)]
pub struct WorkspaceClient {
    /// Workspace base URL (e.g. "https://dbc-45210aa6-83e8.cloud.databricks.com")
    base_url: String,
    /// Personal access token for bearer authentication
    token: String,
    /// HTTP client instance
    client: Client,
}

impl WorkspaceClient {
    /// Create a new workspace client
    ///
    /// # Arguments
    /// * `base_url` - The workspace base URL
    /// * `token` - Access token sent as `Authorization: Bearer <token>`
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a workspace client with a custom HTTP client
    ///
    /// This is how callers bound the trigger call: configure the timeout on
    /// the reqwest client and a slow control plane resolves to a network
    /// error instead of hanging.
    ///
    /// # Example
    /// ```
    /// use surveyor_client::WorkspaceClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = WorkspaceClient::with_client(
    ///     "https://dbc-45210aa6-83e8.cloud.databricks.com",
    ///     "dapi-secret-token",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the workspace base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle a control-plane response and deserialize JSON
    ///
    /// Non-success statuses map to their error kind with the response body
    /// as the message; a success status with an unparsable body is a
    /// malformed response, not a transport error.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ClientError::from_status(status.as_u16(), message));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("cannot parse body: {e}")))
    }
}

impl std::fmt::Debug for WorkspaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = WorkspaceClient::new("https://example.cloud.databricks.com", "tok");
        assert_eq!(client.base_url(), "https://example.cloud.databricks.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = WorkspaceClient::new("https://example.cloud.databricks.com/", "tok");
        assert_eq!(client.base_url(), "https://example.cloud.databricks.com");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = WorkspaceClient::new("https://example.cloud.databricks.com", "dapi-secret");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("dapi-secret"));
    }
}
