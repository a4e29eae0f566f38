use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, eyre};

pub const APP_DIR_NAME: &str = "redshift-setup";

/// `<config_dir>/redshift-setup`, or the explicit override when given.
pub fn resolve_config_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let config_base = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
    Ok(config_base.join(APP_DIR_NAME))
}

pub fn ensure_log_dir(config_dir: &Path) -> Result<PathBuf> {
    let log_dir = config_dir.join("logs");
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }
    Ok(log_dir)
}
