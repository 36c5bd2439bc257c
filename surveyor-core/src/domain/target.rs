//! Job target configuration

use serde::{Deserialize, Serialize};

/// Where a trigger call lands: one job definition in one workspace
///
/// Sourced from configuration at startup; immutable for the process
/// lifetime. The workspace URL is used both for the control-plane call and
/// for deriving the dashboard URL of a submitted run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTarget {
    /// Workspace base URL (e.g. "https://dbc-45210aa6-83e8.cloud.databricks.com")
    pub workspace_url: String,
    /// Identifier of the job definition on the control plane
    pub job_id: u64,
    /// Organization (tenant) identifier, used only in the dashboard URL
    pub org_id: String,
}
