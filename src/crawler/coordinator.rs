//! Audit coordinator - runs the whole pipeline once
//!
//! Builds the HTTP client, parses and classifies the sitemap, writes the
//! report and summarizes the run. Nothing is written when the sitemap page
//! itself cannot be fetched.

use crate::config::Config;
use crate::crawler::{build_http_client, parse_all};
use crate::output::{write_report_file, AuditSummary};
use crate::AuditError;
use chrono::Utc;
use std::path::Path;

/// Runs a complete audit with the given configuration
///
/// # Returns
///
/// * `Ok(AuditSummary)` - The report was written
/// * `Err(AuditError)` - The run failed before a report could be written
pub async fn run_audit(config: &Config) -> Result<AuditSummary, AuditError> {
    let started_at = Utc::now();
    tracing::info!("Starting audit of {}", config.target.sitemap_url);

    let client = build_http_client(&config.http)?;
    let dict = parse_all(&client, config).await?;

    tracing::info!(
        "Checked {} links in {} containers",
        dict.total_links(),
        dict.len()
    );

    write_report_file(
        &dict,
        &config.output.unnamed_placeholder,
        Path::new(&config.output.report_path),
    )?;

    let summary = AuditSummary::from_dictionary(&dict, started_at, Utc::now());
    tracing::info!(
        "Audit finished: {} of {} links broken",
        summary.broken_links,
        summary.links
    );

    Ok(summary)
}
