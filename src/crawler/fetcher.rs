//! HTTP fetcher implementation
//!
//! This module handles every HTTP request the auditor makes:
//! - Building the HTTP client with the configured user agent
//! - GET requests returning the page body as text
//!
//! There is exactly one attempt per URL and no client-side timeout. Failures
//! are logged and reported as `None`; deciding what a failure means is left
//! to the caller.

use crate::config::HttpConfig;
use reqwest::Client;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sitemap_audit::config::HttpConfig;
/// use sitemap_audit::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as text
///
/// Transport errors, timeouts and non-2xx responses are all logged and
/// collapsed into `None`. No retries are made.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
pub async fn fetch_html(client: &Client, url: &str) -> Option<String> {
    match get_text(client, url).await {
        Ok(body) => Some(body),
        Err(e) => {
            if e.is_timeout() {
                tracing::warn!("Request timeout for {}", url);
            } else if e.is_connect() {
                tracing::warn!("Connection failed for {}: {}", url, e);
            } else {
                tracing::warn!("Failed to fetch {}: {}", url, e);
            }
            None
        }
    }
}

async fn get_text(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    response.text().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&HttpConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_default_client_waits_for_slow_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<p>slow but fine</p>")
                    .set_delay(std::time::Duration::from_secs(31)),
            )
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig::default()).unwrap();
        let body = fetch_html(&client, &format!("{}/slow", server.uri())).await;
        assert_eq!(body.as_deref(), Some("<p>slow but fine</p>"));
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", "TestAuditor/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig {
            user_agent: "TestAuditor/1.0".to_string(),
        })
        .unwrap();

        let body = fetch_html(&client, &format!("{}/page", server.uri())).await;
        assert_eq!(body.as_deref(), Some("<p>hello</p>"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig::default()).unwrap();
        let body = fetch_html(&client, &format!("{}/missing", server.uri())).await;
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_none() {
        let client = build_http_client(&HttpConfig::default()).unwrap();
        assert!(fetch_html(&client, "not a url").await.is_none());
    }
}
