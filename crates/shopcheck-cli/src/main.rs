//! shopcheck - headless verification of the storefront UI
//!
//! Usage:
//!   shopcheck                       Verify http://localhost:3000
//!   shopcheck --url <URL>           Verify a different storefront
//!   shopcheck --json                Also print the run report as JSON
//!
//! Exits 0 when the verification sequence passes and 1 on any fatal
//! failure, with the error on stderr.

use anyhow::Result;
use clap::Parser;
use shopcheck_core::RunConfig;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "shopcheck")]
#[command(author, version, about = "Headless verification of the storefront UI")]
struct Cli {
    /// Base URL of the storefront under verification
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Screenshot path written when the run succeeds
    #[arg(long, value_name = "FILE", default_value = "verification/final_state.png")]
    success_screenshot: PathBuf,

    /// Screenshot path written when the run fails
    #[arg(long, value_name = "FILE", default_value = "verification/failure_state.png")]
    failure_screenshot: PathBuf,

    /// Seconds to wait for the product grid or empty state
    #[arg(long, default_value = "10")]
    assert_timeout: u64,

    /// Run with a visible browser window instead of headless
    #[arg(long)]
    headed: bool,

    /// Print the run report as pretty JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RunConfig {
        base_url: cli.url,
        success_screenshot: cli.success_screenshot,
        failure_screenshot: cli.failure_screenshot,
        assert_timeout_secs: cli.assert_timeout,
        headless: !cli.headed,
        ..RunConfig::default()
    };

    let report = shopcheck_runner::run(&config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if report.success {
        println!("Storefront verification successful!");
        Ok(())
    } else {
        let message = report
            .error
            .clone()
            .unwrap_or_else(|| "verification failed".to_string());
        Err(anyhow::anyhow!("Verification failed: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["shopcheck"]);
        assert_eq!(cli.url, "http://localhost:3000");
        assert_eq!(cli.assert_timeout, 10);
        assert!(!cli.headed);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "shopcheck",
            "--url",
            "http://localhost:8080",
            "--headed",
            "--assert-timeout",
            "5",
        ]);
        assert_eq!(cli.url, "http://localhost:8080");
        assert_eq!(cli.assert_timeout, 5);
        assert!(cli.headed);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
