use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[rupture_derive::rupture_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides.
///
/// Layers, later wins:
/// 1. **Base File**: `path`, or `rupture` (any supported extension) in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `RUPTURE__`, nested with double
///    underscores (`RUPTURE__RATE_AND_STATE__A` maps to `rate_and_state.a`). Values are
///    parsed, so `RUPTURE__FRICTION_LAW=103` is a number.
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use rupture_kernel::config::load_config;
/// use rupture_kernel::domain::config::RuptureConfig;
///
/// let cfg: RuptureConfig = load_config(Some("config/missing")).unwrap_or_default();
/// assert_eq!(cfg.friction_law, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("rupture"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("RUPTURE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
