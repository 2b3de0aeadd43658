pub mod check;
pub mod list;
pub mod run;

use anyhow::{Context, Result};
use rupture::domain::config::RuptureConfig;
use rupture::kernel::config::load_config;
use rupture_logger::Logger;
use std::path::Path;

/// Loads the configuration and installs the logger its `logging` section describes.
///
/// # Errors
/// Returns an error if the file is missing or malformed, or the logging section is invalid.
pub fn load(path: &Path) -> Result<(RuptureConfig, Logger)> {
    let config: RuptureConfig = load_config(Some(path))
        .with_context(|| format!("Critical: configuration {} is malformed", path.display()))?;
    let logger = Logger::from_config(&config.logging).context("Failed to initialize logging")?;
    Ok((config, logger))
}
