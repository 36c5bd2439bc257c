//! Surveyor CLI
//!
//! Command-line trigger for the survey-processing job: validates the date
//! and region, submits a run to the workspace control plane, and prints the
//! run id with its dashboard URL.

mod config;
mod trigger;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use config::Config;

#[derive(Parser)]
#[command(name = "surveyor")]
#[command(about = "Trigger the survey-processing job", long_about = None)]
struct Cli {
    /// Processing date in YYYY-MM-DD format
    #[arg(long)]
    date: String,

    /// Region code to process (e.g. EU, US, APAC)
    #[arg(long)]
    region: String,

    /// Network timeout for the trigger call, in seconds
    #[arg(long, env = "SURVEYOR_TIMEOUT", default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env(Duration::from_secs(cli.timeout))?;

    trigger::run(&cli.date, &cli.region, &config).await
}
