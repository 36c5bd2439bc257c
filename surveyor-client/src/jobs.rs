//! Job trigger operations

use tracing::debug;

use surveyor_core::domain::run::{RunId, RunRequest, RunSubmission};
use surveyor_core::domain::target::JobTarget;
use surveyor_core::dto::jobs::{RunNowRequest, RunNowResponse};

use crate::WorkspaceClient;
use crate::error::{ClientError, Result};
use crate::run_url::build_run_url;

impl WorkspaceClient {
    /// Start one run of a job
    ///
    /// POSTs to the control plane's `run-now` endpoint with the request's
    /// date and region as the job's named parameters. Exactly one outbound
    /// call per invocation, no retries. NOT idempotent: two calls with
    /// identical parameters start two distinct runs.
    ///
    /// # Arguments
    /// * `job_id` - Identifier of the job definition to run
    /// * `request` - The validated run parameters
    ///
    /// # Returns
    /// The run identifier issued by the control plane
    pub async fn run_now(&self, job_id: u64, request: &RunRequest) -> Result<RunId> {
        let url = format!("{}/api/2.1/jobs/run-now", self.base_url);
        let body = RunNowRequest::new(job_id, request);

        debug!(job_id, date = %request.date, region = %request.region, "submitting run-now request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        debug!(status = response.status().as_u16(), "run-now response received");

        let response: RunNowResponse = self.handle_response(response).await?;

        response.run_id.map(RunId::from).ok_or_else(|| {
            ClientError::MalformedResponse("response body carries no run_id".to_string())
        })
    }

    /// Trigger a run and resolve its dashboard URL
    ///
    /// The composed invocation: submits a run for `target.job_id` and, on
    /// success, derives the URL an operator can open to watch it.
    ///
    /// # Arguments
    /// * `target` - The configured job target (workspace, job id, org id)
    /// * `request` - The validated run parameters
    ///
    /// # Returns
    /// The run id together with its tracking URL
    pub async fn trigger(&self, target: &JobTarget, request: &RunRequest) -> Result<RunSubmission> {
        let run_id = self.run_now(target.job_id, request).await?;
        let run_url = build_run_url(&target.workspace_url, target.job_id, &run_id, &target.org_id)?;

        Ok(RunSubmission { run_id, run_url })
    }
}
