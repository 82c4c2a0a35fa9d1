//! Sitemap-Audit main entry point
//!
//! This is the command-line interface for the Sitemap-Audit broken-link auditor.

use clap::Parser;
use std::path::PathBuf;
use sitemap_audit::config::{load_config_with_hash, validate, Config};
use sitemap_audit::crawler::audit;
use sitemap_audit::output::print_summary;
use tracing_subscriber::EnvFilter;

/// Sitemap-Audit: a broken-link auditor for sitemap pages
///
/// Sitemap-Audit fetches a sitemap page, groups its links by container,
/// checks every link for the site's global error page and writes a CSV
/// report. With no arguments it audits the built-in default target.
#[derive(Parser, Debug)]
#[command(name = "sitemap-audit")]
#[command(version)]
#[command(about = "A broken-link auditor for sitemap pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the sitemap URL to audit
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Override the CSV report path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    // Command-line overrides win over the file
    if let Some(url) = cli.url {
        config.target.sitemap_url = url;
    }
    if let Some(output) = cli.output {
        config.output.report_path = output.to_string_lossy().into_owned();
    }
    validate(&config)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    match audit(&config).await {
        Ok(summary) => {
            if !cli.quiet {
                print_summary(&summary);
                println!("\n✓ Report written to: {}", config.output.report_path);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Audit failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_audit=info,warn"),
            1 => EnvFilter::new("sitemap_audit=debug,info"),
            2 => EnvFilter::new("sitemap_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be audited
fn handle_dry_run(config: &Config) {
    println!("=== Sitemap-Audit Dry Run ===\n");

    println!("Target:");
    println!("  Sitemap URL: {}", config.target.sitemap_url);

    println!("\nMarkers:");
    println!("  Containers: {}", config.markers.container_selector());
    println!("  Error page: {}", config.markers.error_selector());

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);

    println!("\nOutput:");
    println!("  Report: {}", config.output.report_path);
    println!("  Unnamed placeholder: {}", config.output.unnamed_placeholder);

    println!("\n✓ Configuration is valid");
}
