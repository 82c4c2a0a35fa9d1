//! Summary statistics for an audit run
//!
//! This module condenses a finished link dictionary into counts that are
//! logged and printed at the end of a run.

use crate::model::LinkDictionary;
use chrono::{DateTime, Utc};

/// Audit run summary
#[derive(Debug, Clone)]
pub struct AuditSummary {
    /// Number of named containers, including those without links
    pub containers: usize,

    /// Total number of links checked
    pub links: usize,

    /// Number of topic links
    pub topic_links: usize,

    /// Number of links classified as broken
    pub broken_links: usize,

    /// Broken links as `(container, url)` pairs, in report order
    pub broken: Vec<(String, String)>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,
}

impl AuditSummary {
    /// Builds a summary from the dictionary of a finished run
    pub fn from_dictionary(
        dict: &LinkDictionary,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let mut topic_links = 0;
        let mut broken = Vec::new();

        for (name, links) in dict.iter() {
            for link in links {
                if link.is_topic_url {
                    topic_links += 1;
                }
                if link.is_broken {
                    broken.push((name.to_string(), link.url.clone()));
                }
            }
        }

        Self {
            containers: dict.len(),
            links: dict.total_links(),
            topic_links,
            broken_links: broken.len(),
            broken,
            started_at,
            finished_at,
        }
    }

    /// Percentage of checked links that are broken
    pub fn broken_ratio(&self) -> f64 {
        if self.links == 0 {
            0.0
        } else {
            (self.broken_links as f64 / self.links as f64) * 100.0
        }
    }

    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Prints the summary to stdout in a human-readable format
pub fn print_summary(summary: &AuditSummary) {
    println!("=== Sitemap Audit Summary ===\n");

    println!("Started:  {}", summary.started_at.to_rfc3339());
    println!("Finished: {}", summary.finished_at.to_rfc3339());
    println!("Duration: {} seconds\n", summary.duration_seconds());

    println!("Containers:   {}", summary.containers);
    println!("Links:        {}", summary.links);
    println!("Topic links:  {}", summary.topic_links);
    println!(
        "Broken links: {} ({:.2}%)",
        summary.broken_links,
        summary.broken_ratio()
    );

    if !summary.broken.is_empty() {
        println!("\nBroken:");
        for (container, url) in &summary.broken {
            println!("  {} - {}", container, url);
        }
    }
}
