//! Configuration module for Sitemap-Audit
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so `Config::default()` is a complete configuration.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("audit.toml")).unwrap();
//! println!("Auditing: {}", config.target.sitemap_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, MarkerConfig, OutputConfig, TargetConfig, DEFAULT_SITEMAP_URL,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
