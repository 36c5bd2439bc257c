//! Trigger command handler
//!
//! Validates the caller-supplied parameters, submits the run, and renders
//! the outcome. Validation and configuration problems never reach the
//! network.

use anyhow::{Context, Result};
use colored::*;

use surveyor_client::WorkspaceClient;
use surveyor_core::domain::region::RegionSet;
use surveyor_core::domain::run::RunRequest;

use crate::config::Config;

/// Validate the parameters and start one run
///
/// # Arguments
/// * `date` - Raw processing date from the command line
/// * `region` - Raw region code from the command line
/// * `config` - The CLI configuration
pub async fn run(date: &str, region: &str, config: &Config) -> Result<()> {
    let request = RunRequest::parse(date, region, &RegionSet::default())?;

    let http_client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let client = WorkspaceClient::with_client(
        config.workspace_url.clone(),
        config.token.clone(),
        http_client,
    );

    let submission = client.trigger(&config.target(), &request).await?;

    println!("{}", "✓ Job run started!".green().bold());
    println!("  Run ID:  {}", submission.run_id.to_string().cyan());
    println!("  Date:    {}", request.date);
    println!("  Region:  {}", request.region);
    println!("  Run URL: {}", submission.run_url.underline());

    Ok(())
}
