//! Sitemap parser for grouping links by container
//!
//! # Positional Rules
//!
//! Within each container the anchors are visited in document order:
//!
//! | Position | Effect |
//! |----------|--------|
//! | 0 | Ignored entirely |
//! | 1 | Its inner HTML names the container; recorded as the topic link |
//! | 2.. | Recorded as regular links |
//!
//! Anchors without an `href` never produce a link. The naming anchor still
//! (re)binds the container name even when it has no `href`.

use crate::config::{Config, MarkerConfig};
use crate::crawler::classifier::BrokenPageDetector;
use crate::crawler::fetcher::fetch_html;
use crate::model::{Link, LinkDictionary};
use crate::AuditError;
use reqwest::Client;
use scraper::{Html, Selector};
use std::future::Future;
use url::Url;

/// An anchor element extracted from a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Inner HTML of the anchor
    pub inner_html: String,

    /// The `href` attribute, `None` when missing or empty
    pub href: Option<String>,
}

/// The anchors of one container, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerAnchors {
    pub anchors: Vec<Anchor>,
}

/// Compiled selectors used to walk the sitemap page
#[derive(Debug, Clone)]
pub struct SitemapSelectors {
    container: Selector,
    anchor: Selector,
}

impl SitemapSelectors {
    /// Builds the selectors from the configured markers
    pub fn new(markers: &MarkerConfig) -> Result<Self, AuditError> {
        let selector = markers.container_selector();
        let container = Selector::parse(&selector)
            .map_err(|e| AuditError::Selector(format!("'{}': {:?}", selector, e)))?;
        let anchor =
            Selector::parse("a").map_err(|e| AuditError::Selector(format!("'a': {:?}", e)))?;

        Ok(Self { container, anchor })
    }
}

/// Extracts every container and its anchors from the sitemap HTML
///
/// # Arguments
///
/// * `html` - The sitemap page content
/// * `selectors` - Selectors built from the configured markers
///
/// # Returns
///
/// Containers in document order. A page without containers yields an
/// empty vector.
pub fn extract_containers(html: &str, selectors: &SitemapSelectors) -> Vec<ContainerAnchors> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.container)
        .map(|container| ContainerAnchors {
            anchors: container
                .select(&selectors.anchor)
                .map(|anchor| Anchor {
                    inner_html: anchor.inner_html(),
                    href: anchor
                        .value()
                        .attr("href")
                        .filter(|href| !href.is_empty())
                        .map(str::to_string),
                })
                .collect(),
        })
        .collect()
}

/// Applies the positional rules and classifies every qualifying link
///
/// `probe` is awaited once per link, strictly one after another, and its
/// result becomes the link's `is_broken` flag.
pub async fn group_links<F, Fut>(containers: &[ContainerAnchors], mut probe: F) -> LinkDictionary
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut dict = LinkDictionary::new();

    for container in containers {
        let mut container_name = String::new();

        for (index, anchor) in container.anchors.iter().enumerate() {
            if index == 0 {
                continue;
            }

            if index == 1 {
                container_name = anchor.inner_html.clone();
                dict.reset(&container_name);
                tracing::info!(
                    "on container: {} ({})",
                    container_name,
                    container.anchors.len()
                );
            }

            let Some(href) = &anchor.href else {
                tracing::debug!(
                    "Skipping anchor {} in {} without href",
                    index,
                    container_name
                );
                continue;
            };

            let is_broken = probe(href.clone()).await;
            tracing::info!("processing: {} - {}", container_name, href);

            dict.push(
                &container_name,
                Link {
                    url: href.clone(),
                    is_topic_url: index == 1,
                    is_broken,
                },
            );
        }
    }

    dict
}

/// Fetches the sitemap page and builds the classified link dictionary
///
/// Hrefs are resolved against the sitemap URL before they are fetched; the
/// dictionary keeps the raw `href` values. An href that cannot be resolved
/// is broken.
///
/// # Errors
///
/// * `AuditError::SitemapUnavailable` - The sitemap page itself could not be fetched
/// * `AuditError::UrlParse` - The sitemap URL is not a valid base URL
/// * `AuditError::Selector` - The configured markers do not form valid selectors
pub async fn parse_all(client: &Client, config: &Config) -> Result<LinkDictionary, AuditError> {
    let sitemap_url = &config.target.sitemap_url;
    let base_url = Url::parse(sitemap_url)?;
    let selectors = SitemapSelectors::new(&config.markers)?;
    let detector = BrokenPageDetector::new(&config.markers)?;

    tracing::info!("Fetching sitemap page: {}", sitemap_url);
    let html = fetch_html(client, sitemap_url)
        .await
        .ok_or_else(|| AuditError::SitemapUnavailable {
            url: sitemap_url.clone(),
        })?;

    let containers = extract_containers(&html, &selectors);
    tracing::info!("Found {} containers", containers.len());

    let base_url = &base_url;
    let detector = &detector;
    let dict = group_links(&containers, move |href| {
        let target = base_url.join(&href);
        async move {
            match target {
                Ok(target) => detector.check_link(client, target.as_str()).await,
                Err(e) => {
                    tracing::warn!("Cannot resolve link {}: {}", href, e);
                    true
                }
            }
        }
    })
    .await;

    Ok(dict)
}
