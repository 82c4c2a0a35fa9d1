use crate::config::types::{Config, HttpConfig, MarkerConfig, OutputConfig, TargetConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_target_config(&config.target)?;
    validate_marker_config(&config.markers)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the sitemap URL
fn validate_target_config(config: &TargetConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.sitemap_url).map_err(|e| {
        ConfigError::InvalidUrl(format!(
            "Invalid sitemap_url '{}': {}",
            config.sitemap_url, e
        ))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "sitemap_url '{}' must use HTTP or HTTPS",
            config.sitemap_url
        )));
    }

    Ok(())
}

/// Validates the markup markers and the selectors built from them
fn validate_marker_config(config: &MarkerConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("content_region", &config.content_region),
        ("container_attribute", &config.container_attribute),
        ("container_prefix", &config.container_prefix),
        ("error_attribute", &config.error_attribute),
        ("error_prefix", &config.error_prefix),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    // The region is prefixed to the container selector, so it must be a
    // single selector rather than a list
    if config.content_region.contains(',') {
        return Err(ConfigError::Validation(format!(
            "content_region must be a single selector, got '{}'",
            config.content_region
        )));
    }

    for selector in [config.container_selector(), config.error_selector()] {
        Selector::parse(&selector).map_err(|e| {
            ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e))
        })?;
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.report_path.is_empty() {
        return Err(ConfigError::Validation(
            "report_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
