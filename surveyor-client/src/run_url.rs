//! Dashboard URL construction

use url::Url;

use surveyor_core::domain::run::RunId;

use crate::error::ConfigError;

/// Build the dashboard URL for tracking a run
///
/// Only the host (and explicit port) of `workspace_url` is kept; any path,
/// query, or fragment is discarded. The dashboard is always reached over
/// https regardless of the configured scheme.
///
/// # Arguments
/// * `workspace_url` - The workspace base URL from configuration
/// * `job_id` - Identifier of the job definition
/// * `run_id` - Identifier of the submitted run
/// * `org_id` - Organization (tenant) identifier
pub fn build_run_url(
    workspace_url: &str,
    job_id: u64,
    run_id: &RunId,
    org_id: &str,
) -> Result<String, ConfigError> {
    let parsed = Url::parse(workspace_url).map_err(|e| {
        ConfigError::new(format!("cannot parse workspace URL {workspace_url:?}: {e}"))
    })?;

    let host = parsed
        .host_str()
        .ok_or_else(|| ConfigError::new(format!("workspace URL {workspace_url:?} has no host")))?;

    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Ok(format!(
        "https://{authority}/?o={org_id}#job/{job_id}/run/{run_id}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_dashboard_url() {
        let url = build_run_url(
            "https://dbc-45210aa6-83e8.cloud.databricks.com",
            860716632182514,
            &RunId::new("12345"),
            "4924241215537505",
        )
        .unwrap();

        assert_eq!(
            url,
            "https://dbc-45210aa6-83e8.cloud.databricks.com/?o=4924241215537505#job/860716632182514/run/12345"
        );
    }

    #[test]
    fn test_discards_path_and_query() {
        let url = build_run_url(
            "https://example.cloud.databricks.com/api/2.1/jobs?x=1",
            1,
            &RunId::new("2"),
            "3",
        )
        .unwrap();

        assert_eq!(url, "https://example.cloud.databricks.com/?o=3#job/1/run/2");
    }

    #[test]
    fn test_preserves_explicit_port() {
        let url = build_run_url("http://127.0.0.1:8443", 1, &RunId::new("2"), "3").unwrap();
        assert_eq!(url, "https://127.0.0.1:8443/?o=3#job/1/run/2");
    }

    #[test]
    fn test_rejects_url_without_host() {
        let err = build_run_url("mailto:ops@example.com", 1, &RunId::new("2"), "3").unwrap_err();
        assert!(err.reason.contains("no host"));
    }

    #[test]
    fn test_rejects_unparsable_url() {
        let schemeless = "dbc-45210aa6-83e8.cloud.databricks.com";
        assert!(build_run_url(schemeless, 1, &RunId::new("2"), "3").is_err());
        assert!(build_run_url("", 1, &RunId::new("2"), "3").is_err());
    }
}
