use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use workout_core::cli::{demo_packages, print_training_report};

fn main() -> Result<()> {
    // stdout carries the report, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    print_training_report(&demo_packages()).context("demo packages failed to evaluate")?;
    Ok(())
}
