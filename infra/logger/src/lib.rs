//! # Logger
//!
//! Installs the global `tracing` subscriber for Shutter binaries.
//! Console output, rolling file output (plain or JSON lines) and env-filter
//! directives are configured through [`LoggerBuilder`], either by hand or from
//! the `[logging]` section of the application config.
//!
//! Library crates never call into this crate; they only emit `tracing` events.
//!
//! ## Example
//!
//! ```rust
//! use shutter_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use shutter_domain::config::LoggingConfig;
use std::{fs, io};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
#[must_use = "The builder must be configured before it can be used to initialize the logger."]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    path: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl LoggerBuilder {
    /// Configures the minimum log level to be emitted.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds explicit filter directives (e.g., `shutter_mapper=trace`).
    ///
    /// This replaces `RUST_LOG` as the source of directives. Invalid filters make
    /// [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables console output. Console logs go to stderr so stdout stays
    /// free for program output.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes rolling log files into `path` (created on init).
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Rotation strategy of the log files.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Maximum number of rotated files to keep.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Writes file logs as JSON lines. Console output stays human readable.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. It owns the non-blocking writer guard when file output is
    /// enabled; keep it alive for the duration of the program.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings,
    /// [`LoggerError::Appender`] if the log directory cannot be used, and
    /// [`LoggerError::Subscriber`] if a global subscriber has already been set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;

        let env_filter = self.build_env_filter()?;
        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_ansi(true).with_writer(io::stderr).boxed());
        }

        let guard = if let Some(path) = &self.path {
            fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(self.rotation.clone())
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.max_files)
                .build(path)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(name = %self.name, file = self.path.is_some(), "Logger initialized");
        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }

        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        self.env_filter.as_ref().map_or_else(
            || Ok(builder.from_env_lossy()),
            |filter| {
                builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid env filter '{filter}': {e}").into(),
                    context: None,
                })
            },
        )
    }
}

/// A handle to the initialized logging system.
///
/// Dropping it flushes and stops the background file writer.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a [`LoggerBuilder`] with console output at `INFO`.
    ///
    /// `name` identifies the application and prefixes rolling log files
    /// (e.g., `shutter.2026-10-16.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            path: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }

    /// Prepares a [`LoggerBuilder`] from the `[logging]` config section.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if `level` is not a known level name.
    pub fn from_config(
        name: impl Into<String>,
        config: &LoggingConfig,
    ) -> Result<LoggerBuilder, LoggerError> {
        let level = config.level.parse::<LevelFilter>().map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid log level '{}': {e}", config.level).into(),
                context: None,
            }
        })?;

        let mut builder =
            Self::builder(name).level(level).max_files(config.max_files).json(config.json);
        if let Some(filter) = &config.filter {
            builder = builder.env_filter(filter.clone());
        }
        if let Some(path) = &config.path {
            builder = builder.path(path.clone());
        }
        Ok(builder)
    }

    /// Returns a reference to the underlying worker guard, if present.
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
