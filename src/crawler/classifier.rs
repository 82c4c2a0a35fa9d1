//! Broken-link classification
//!
//! A link is broken when its page cannot be fetched, or when the fetched
//! page renders the site's global error component. A fetched page without
//! the error component is never broken; there is no "unknown" outcome.

use crate::config::MarkerConfig;
use crate::crawler::fetcher::fetch_html;
use crate::AuditError;
use reqwest::Client;
use scraper::{Html, Selector};

/// Detects the global error component in fetched pages
#[derive(Debug, Clone)]
pub struct BrokenPageDetector {
    error_selector: Selector,
}

impl BrokenPageDetector {
    /// Builds a detector from the configured error marker
    pub fn new(markers: &MarkerConfig) -> Result<Self, AuditError> {
        let selector = markers.error_selector();
        let error_selector = Selector::parse(&selector)
            .map_err(|e| AuditError::Selector(format!("'{}': {:?}", selector, e)))?;

        Ok(Self { error_selector })
    }

    /// Returns true if the page contains at least one error marker element
    ///
    /// An empty selection means the page is not broken.
    pub fn is_broken_page(&self, html: &str) -> bool {
        let document = Html::parse_document(html);
        document.select(&self.error_selector).next().is_some()
    }

    /// Fetches `url` and classifies the result
    ///
    /// An unreachable page is broken.
    pub async fn check_link(&self, client: &Client, url: &str) -> bool {
        match fetch_html(client, url).await {
            Some(html) => self.is_broken_page(&html),
            None => true,
        }
    }
}
