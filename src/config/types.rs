use serde::Deserialize;

/// Default sitemap page audited when no configuration is given
pub const DEFAULT_SITEMAP_URL: &str = "https://www.tokopedia.com/p/daftar-halaman";

/// Main configuration structure for Sitemap-Audit
///
/// Every section is optional; missing sections and keys fall back to the
/// built-in defaults so the tool runs without a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub target: TargetConfig,
    pub markers: MarkerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// The page being audited
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Absolute URL of the sitemap page
    #[serde(rename = "sitemap-url")]
    pub sitemap_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            sitemap_url: DEFAULT_SITEMAP_URL.to_string(),
        }
    }
}

/// Markup markers the auditor depends on
///
/// These mirror attributes rendered by the target site and must be updated
/// whenever the site changes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Selector for the region that holds the link containers
    #[serde(rename = "content-region")]
    pub content_region: String,

    /// Attribute that tags container elements with their type
    #[serde(rename = "container-attribute")]
    pub container_attribute: String,

    /// Prefix of the container type attribute value
    #[serde(rename = "container-prefix")]
    pub container_prefix: String,

    /// Attribute that tags the global error component
    #[serde(rename = "error-attribute")]
    pub error_attribute: String,

    /// Prefix of the error component attribute value
    #[serde(rename = "error-prefix")]
    pub error_prefix: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            content_region: "#content".to_string(),
            container_attribute: "__typename".to_string(),
            container_prefix: "RechargeSlugSitemap".to_string(),
            error_attribute: "data-unify".to_string(),
            error_prefix: "GlobalError".to_string(),
        }
    }
}

impl MarkerConfig {
    /// CSS selector matching every link container inside the content region
    pub fn container_selector(&self) -> String {
        format!(
            "{} div[{}^=\"{}\"]",
            self.content_region, self.container_attribute, self.container_prefix
        )
    }

    /// CSS selector matching the global error component
    pub fn error_selector(&self) -> String {
        format!("div[{}^=\"{}\"]", self.error_attribute, self.error_prefix)
    }
}

/// HTTP client configuration
///
/// Requests carry no client-side timeout; a slow page is waited for.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("sitemap-audit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV report file
    #[serde(rename = "report-path")]
    pub report_path: String,

    /// Written in the Container column when a container has an empty name
    #[serde(rename = "unnamed-placeholder")]
    pub unnamed_placeholder: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: "daftar-halaman.csv".to_string(),
            unnamed_placeholder: "Unnamed / Empty String".to_string(),
        }
    }
}
