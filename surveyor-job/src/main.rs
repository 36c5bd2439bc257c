//! Survey Processing Job
//!
//! Entry point executed inside the job's remote environment. The control
//! plane passes the trigger call's named parameters as command-line flags.
//!
//! This binary owns argument handling, logging, and exit codes; the stage
//! list is scaffolding for the regional processing pipeline and each stage
//! currently only logs.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surveyor_core::domain::region::RegionSet;
use surveyor_core::domain::run::RunRequest;

const STAGES: &[&str] = &[
    "Loading data",
    "Validating schema",
    "Applying transformations",
    "Saving results",
];

#[derive(Parser)]
#[command(name = "survey-processing")]
#[command(about = "Survey processing job entry point", long_about = None)]
struct Args {
    /// Processing date in YYYY-MM-DD format
    #[arg(long)]
    date: String,

    /// Region code to process
    #[arg(long)]
    region: String,
}

fn main() -> Result<()> {
    // Logging is initialized exactly once, here; library code never touches
    // the global subscriber.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surveyor_job=info,survey_processing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("{}", "=".repeat(80));
    info!("Survey Processing Job Started");
    info!("{}", "=".repeat(80));

    let request = match RunRequest::parse(&args.date, &args.region, &RegionSet::default()) {
        Ok(request) => request,
        Err(e) => {
            error!("Invalid job parameters: {e}");
            return Err(e.into());
        }
    };

    info!("Job Configuration:");
    info!("  Date:   {}", request.date);
    info!("  Region: {}", request.region);
    info!("{}", "-".repeat(80));

    info!("Starting data processing");
    for stage in STAGES {
        info!("Stage: {stage}");
    }

    info!("{}", "-".repeat(80));
    info!("Survey processing completed successfully");
    info!("{}", "=".repeat(80));

    Ok(())
}
