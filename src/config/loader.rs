//! Reading and writing schedule files

use super::schema::SgdrConfig;
use super::validate::validate_config;
use crate::error::{Result, SgdrError};
use std::fs;
use std::path::Path;

/// Parse a schedule from YAML text without validating it
pub fn parse_config(yaml: &str, origin: &Path) -> Result<SgdrConfig> {
    serde_yaml::from_str(yaml).map_err(|e| SgdrError::ConfigParsing {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate a schedule from a YAML file
///
/// # Example
///
/// ```no_run
/// use sgdr::config::load_config;
///
/// let config = load_config("schedule.yaml")?;
/// # Ok::<(), sgdr::SgdrError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<SgdrConfig> {
    let path = config_path.as_ref();
    if !path.exists() {
        return Err(SgdrError::ConfigNotFound { path: path.to_path_buf() });
    }

    let yaml_content = fs::read_to_string(path)
        .map_err(|e| SgdrError::io(format!("reading {}", path.display()), e))?;

    let config = parse_config(&yaml_content, path)?;
    validate_config(&config)?;

    tracing::debug!(path = %path.display(), "loaded schedule config");
    Ok(config)
}

/// Write a schedule as YAML
pub fn save_config<P: AsRef<Path>>(config: &SgdrConfig, config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let yaml = serde_yaml::to_string(config)?;
    fs::write(path, yaml).map_err(|e| SgdrError::io(format!("writing {}", path.display()), e))
}
