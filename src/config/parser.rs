use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Reads an audit configuration file and validates it
///
/// Keys missing from the file keep their defaults, so an empty file is a
/// valid configuration.
///
/// # Errors
///
/// * `ConfigError::Io` - The file could not be read
/// * `ConfigError::Parse` - The file is not valid TOML
/// * `ConfigError::Validation`, `InvalidUrl`, `InvalidSelector` - A value was rejected
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitemap_audit::config::load_config;
///
/// let config = load_config(Path::new("audit.toml")).unwrap();
/// println!("Report: {}", config.output.report_path);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    let config = parse_config(&raw)?;
    Ok(config)
}

fn parse_config(raw: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(raw)?;
    validate(&config)?;
    Ok(config)
}

/// Hex-encoded SHA-256 fingerprint of a configuration file
///
/// Logged when a run starts so a report can be traced back to the
/// configuration that produced it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let raw = std::fs::read(path)?;
    Ok(hex::encode(Sha256::digest(&raw)))
}

/// Loads a configuration together with its fingerprint
///
/// The file is read once, so the fingerprint always matches the content
/// that was parsed.
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    let config = parse_config(&raw)?;
    let fingerprint = hex::encode(Sha256::digest(raw.as_bytes()));
    Ok((config, fingerprint))
}
