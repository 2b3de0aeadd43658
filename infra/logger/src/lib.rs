//! # Logger
//!
//! Installs the global `tracing` subscriber for the `rupture` binaries.
//!
//! Console output goes to **stderr**, so a command can print its results on stdout as JSON
//! while logging. An optional rolling file layer (plain or JSON) writes through a
//! non-blocking worker; keep the returned [`Logger`] alive until shutdown so it can flush.
//!
//! Filtering follows `RUST_LOG` unless an explicit directive is set with
//! [`LoggerBuilder::env_filter`] (e.g., `"rupture=debug,rupture_rate_and_state=trace"`).
//!
//! ## Example
//!
//! ```rust
//! use rupture_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder().level(LevelFilter::DEBUG).init().unwrap();
//! tracing::debug!("ready");
//! ```
//!
//! The same settings can come from the `logging` section of the configuration file through
//! [`Logger::from_config`].

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use rupture_domain::config::LoggingConfig;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const DEFAULT_FILE_PREFIX: &str = "rupture";
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct Settings {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    directory: Option<PathBuf>,
    file_prefix: String,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            directory: None,
            file_prefix: DEFAULT_FILE_PREFIX.to_owned(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

/// Builder state: console output only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Builder state: a log directory is set, file options are available.
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Configures and installs the global tracing subscriber.
///
/// File-only options (`rotation`, `max_files`, `file_prefix`, `json`) become available once
/// [`LoggerBuilder::directory`] has been called.
#[derive(Debug)]
pub struct LoggerBuilder<F: Sealed = ConsoleOnly> {
    settings: Settings,
    state: PhantomData<F>,
}

impl LoggerBuilder<WithFile> {
    /// Maximum number of rotated files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// Log file name prefix (e.g., `rupture.2026-10-18.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.settings.file_prefix = prefix.into();
        self
    }

    /// Writes the file layer as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<F> {
    /// Minimum level when neither [`LoggerBuilder::env_filter`] nor `RUST_LOG` says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Explicit `EnvFilter` directive; takes precedence over `RUST_LOG`.
    ///
    /// An invalid directive makes [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the stderr layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Adds rolling file output into `directory` (created if missing).
    pub fn directory(self, directory: impl Into<PathBuf>) -> LoggerBuilder<WithFile> {
        let mut settings = self.settings;
        settings.directory = Some(directory.into());
        LoggerBuilder { settings, state: PhantomData }
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle holding the file worker's [`WorkerGuard`], if any. Keep it alive
    /// for the duration of the program.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid settings,
    /// [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable and
    /// [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let settings = self.settings;
        validate(&settings)?;
        let env_filter = build_env_filter(&settings)?;

        let mut layers = Vec::new();
        if settings.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = if let Some(directory) = &settings.directory {
            fs::create_dir_all(directory)
                .context(format!("Creating {}", directory.display()))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(settings.rotation.clone())
                .filename_prefix(&settings.file_prefix)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(settings.max_files)
                .build(directory)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = layer().with_writer(non_blocking).with_ansi(false);
            layers.push(if settings.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable the console or set a directory."
                    .into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Holds the background file worker; drop it only when the application shuts down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// A builder with console output at `INFO`.
    ///
    /// ```rust
    /// use rupture_logger::{LevelFilter, Logger};
    ///
    /// let builder = Logger::builder().level(LevelFilter::WARN).directory("logs").max_files(3);
    /// # drop(builder);
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), state: PhantomData }
    }

    /// Installs the subscriber described by the `logging` configuration section.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level name, plus every
    /// [`LoggerBuilder::init`] failure.
    pub fn from_config(config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let builder = Self::builder().level(level);
        let builder = match &config.filter {
            Some(filter) => builder.env_filter(filter),
            None => builder,
        };

        match &config.directory {
            Some(directory) => builder
                .directory(directory)
                .file_prefix(&config.file_prefix)
                .max_files(config.max_files)
                .json(config.json)
                .init(),
            None => builder.init(),
        }
    }

    /// Best-effort synchronization point before shutdown; dropping the handle flushes too.
    pub fn flush(&self) {
        tracing::debug!("Logger flushed");
    }

    /// The file worker guard, present when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name (`"off"`, `"error"` ... `"trace"`, case-insensitive).
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] naming the rejected value.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}'").into(),
        context: Some("logging.level".into()),
    })
}

fn validate(settings: &Settings) -> Result<(), LoggerError> {
    if settings.directory.is_some() && settings.file_prefix.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Log file prefix cannot be empty".into(),
            context: None,
        });
    }

    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_console_at_info() {
        let builder = Logger::builder().env_filter("rupture=debug");
        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("rupture=debug"));
        assert!(builder.settings.directory.is_none());
    }

    #[test]
    fn file_options_follow_the_directory() {
        let builder = Logger::builder()
            .level(LevelFilter::DEBUG)
            .directory("logs")
            .file_prefix("run")
            .max_files(5)
            .json(true);

        assert_eq!(builder.settings.level, LevelFilter::DEBUG);
        assert_eq!(builder.settings.max_files, 5);
        assert_eq!(builder.settings.file_prefix, "run");
        assert!(builder.settings.json);
        assert_eq!(builder.settings.directory.as_deref(), Some(std::path::Path::new("logs")));
    }

    #[test]
    fn invalid_settings_are_rejected_before_install() {
        let err = Logger::builder().directory("logs").max_files(0).init().expect_err("zero files");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().console(false).init().expect_err("no layers");
        assert!(err.to_string().contains("No logging layers"), "{err}");

        let err = Logger::builder().env_filter("rupture=loud").init().expect_err("bad filter");
        assert!(err.to_string().contains("Invalid env filter"), "{err}");
    }

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("warn").ok(), Some(LevelFilter::WARN));
        assert_eq!(parse_level(" TRACE ").ok(), Some(LevelFilter::TRACE));
        let err = parse_level("chatty").expect_err("unknown level");
        assert_eq!(
            err.to_string(),
            "Invalid logger configuration (logging.level): Unknown log level 'chatty'"
        );
    }
}
