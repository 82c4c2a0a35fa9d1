//! Crawler module for fetching and classifying sitemap links
//!
//! This module contains the audit pipeline, including:
//! - HTTP fetching (single attempt, failures become `None`)
//! - Broken-page detection via the global error marker
//! - Sitemap parsing and grouping of links by container
//! - Overall run coordination

mod classifier;
mod coordinator;
mod fetcher;
mod sitemap;

pub use classifier::BrokenPageDetector;
pub use coordinator::run_audit;
pub use fetcher::{build_http_client, fetch_html};
pub use sitemap::{
    extract_containers, group_links, parse_all, Anchor, ContainerAnchors, SitemapSelectors,
};

use crate::config::Config;
use crate::output::AuditSummary;
use crate::AuditError;

/// Runs a complete audit
///
/// This is the main entry point for an audit run. It will:
/// 1. Build the HTTP client
/// 2. Fetch and parse the sitemap page
/// 3. Check every link, one at a time
/// 4. Write the CSV report
/// 5. Summarize the run
///
/// # Arguments
///
/// * `config` - The audit configuration
pub async fn audit(config: &Config) -> Result<AuditSummary, AuditError> {
    run_audit(config).await
}
