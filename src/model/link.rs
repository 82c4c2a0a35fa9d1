//! Link definitions for the audit report

/// A hyperlink extracted from a sitemap container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The raw `href` value as it appeared in the sitemap page
    pub url: String,

    /// True if this anchor named its container
    pub is_topic_url: bool,

    /// True if the linked page was unreachable or carried the error marker
    pub is_broken: bool,
}

impl Link {
    /// Creates the topic link of a container
    pub fn topic(url: impl Into<String>, is_broken: bool) -> Self {
        Self {
            url: url.into(),
            is_topic_url: true,
            is_broken,
        }
    }

    /// Creates a regular (non-topic) link
    pub fn regular(url: impl Into<String>, is_broken: bool) -> Self {
        Self {
            url: url.into(),
            is_topic_url: false,
            is_broken,
        }
    }
}
