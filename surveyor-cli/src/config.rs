//! Configuration module
//!
//! Workspace coordinates come from the process environment (after an
//! optional `.env` load), validated for presence and shape before the
//! client is ever constructed.

use std::time::Duration;

use surveyor_core::domain::target::JobTarget;

/// Trigger CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace base URL (e.g. "https://dbc-45210aa6-83e8.cloud.databricks.com")
    pub workspace_url: String,

    /// Personal access token for the control plane
    pub token: String,

    /// Identifier of the survey-processing job definition
    pub job_id: u64,

    /// Organization (tenant) identifier, used in dashboard URLs
    pub org_id: String,

    /// Upper bound on the trigger network call
    pub timeout: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DATABRICKS_WORKSPACE_URL (required)
    /// - DATABRICKS_ACCESS_TOKEN (required)
    /// - DATABRICKS_JOB_ID (required, integer)
    /// - DATABRICKS_ORG_ID (required)
    pub fn from_env(timeout: Duration) -> anyhow::Result<Self> {
        let workspace_url = require_env("DATABRICKS_WORKSPACE_URL")?;
        let token = require_env("DATABRICKS_ACCESS_TOKEN")?;
        let org_id = require_env("DATABRICKS_ORG_ID")?;

        let job_id = require_env("DATABRICKS_JOB_ID")?;
        let job_id = job_id.parse::<u64>().map_err(|_| {
            anyhow::anyhow!("DATABRICKS_JOB_ID must be an integer, got {job_id:?}")
        })?;

        let config = Self {
            workspace_url,
            token,
            job_id,
            org_id,
            timeout,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.workspace_url.starts_with("http://") && !self.workspace_url.starts_with("https://")
        {
            anyhow::bail!("workspace URL must start with http:// or https://");
        }

        if self.token.is_empty() {
            anyhow::bail!("access token cannot be empty");
        }

        if self.org_id.is_empty() {
            anyhow::bail!("org id cannot be empty");
        }

        if self.timeout.as_secs() == 0 {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// The job target described by this configuration
    pub fn target(&self) -> JobTarget {
        JobTarget {
            workspace_url: self.workspace_url.clone(),
            job_id: self.job_id,
            org_id: self.org_id.clone(),
        }
    }
}

fn require_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|_| anyhow::anyhow!("{name} environment variable not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            workspace_url: "https://dbc-45210aa6-83e8.cloud.databricks.com".to_string(),
            token: "dapi-token".to_string(),
            job_id: 860716632182514,
            org_id: "4924241215537505".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();

        config.workspace_url = "dbc-45210aa6-83e8.cloud.databricks.com".to_string();
        assert!(config.validate().is_err());

        config = valid_config();
        config.token = String::new();
        assert!(config.validate().is_err());

        config = valid_config();
        config.org_id = String::new();
        assert!(config.validate().is_err());

        config = valid_config();
        config.timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_target_carries_workspace_coordinates() {
        let config = valid_config();
        let target = config.target();

        assert_eq!(target.workspace_url, config.workspace_url);
        assert_eq!(target.job_id, 860716632182514);
        assert_eq!(target.org_id, "4924241215537505");
    }
}
