//! Logging System for MapLauncher
//!
//! Installs a `tracing` subscriber with:
//! - Configurable verbosity, globally and per module
//! - Console (stderr unless configured otherwise) and/or daily-rolling file output
//! - Text or JSON formatting

mod config;


pub use config::{
    default_log_directory, ConsoleStream, LogFormat, LogLevel, LogOutput, LoggingConfig,
};

use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// File name used for the rolling log
pub const LOG_FILE_NAME: &str = "maplauncher.log";

/// Logging system errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for logging operations
pub type LoggingResult<T> = Result<T, LoggingError>;

/// Installed logging system; dropping it flushes and closes the log file
pub struct LoggingSystem {
    config: LoggingConfig,
    _guards: Vec<WorkerGuard>,
}

impl LoggingSystem {
    /// Initialize the logging system with the given configuration
    pub fn init(config: LoggingConfig) -> LoggingResult<Self> {
        if config.output != LogOutput::Console {
            let log_dir = config.resolved_log_directory();
            std::fs::create_dir_all(&log_dir).map_err(|e| {
                LoggingError::DirectoryCreationError(format!(
                    "Failed to create log directory {:?}: {}",
                    log_dir, e
                ))
            })?;
        }

        let mut guards = Vec::new();
        let env_filter = Self::build_env_filter(&config);
        let registry = tracing_subscriber::registry();

        match config.output {
            LogOutput::Console => {
                let console_layer = Self::create_console_layer(&config);
                registry
                    .with(env_filter)
                    .with(console_layer)
                    .try_init()
                    .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
            }
            LogOutput::File => {
                let (file_layer, guard) = Self::create_file_layer(&config);
                guards.push(guard);
                registry
                    .with(env_filter)
                    .with(file_layer)
                    .try_init()
                    .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
            }
            LogOutput::Both => {
                let console_layer = Self::create_console_layer(&config);
                let (file_layer, guard) = Self::create_file_layer(&config);
                guards.push(guard);
                registry
                    .with(env_filter)
                    .with(console_layer)
                    .with(file_layer)
                    .try_init()
                    .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
            }
        }

        Ok(Self {
            config,
            _guards: guards,
        })
    }

    /// Build environment filter from configuration; malformed module names are skipped
    pub(crate) fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
        let mut filter = EnvFilter::new(config.level.as_directive());

        for (module, level) in &config.module_levels {
            if let Ok(directive) = format!("{}={}", module, level.as_directive()).parse() {
                filter = filter.add_directive(directive);
            }
        }

        filter
    }

    /// Console layer on the configured terminal stream
    fn create_console_layer<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        match config.console_stream {
            ConsoleStream::Stderr => Self::console_layer_with_writer(config, std::io::stderr),
            ConsoleStream::Stdout => Self::console_layer_with_writer(config, std::io::stdout),
        }
    }

    pub(crate) fn console_layer_with_writer<S, W>(
        config: &LoggingConfig,
        writer: W,
    ) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let layer = fmt::layer().with_writer(writer);

        match config.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Text => layer.boxed(),
        }
    }

    /// Daily-rolling file layer
    fn create_file_layer<S>(
        config: &LoggingConfig,
    ) -> (Box<dyn Layer<S> + Send + Sync>, WorkerGuard)
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            config.resolved_log_directory(),
            LOG_FILE_NAME,
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

        match config.format {
            LogFormat::Json => (layer.json().boxed(), guard),
            LogFormat::Text => (layer.boxed(), guard),
        }
    }

    /// Get current log directory, if file output is enabled
    pub fn log_directory(&self) -> Option<PathBuf> {
        match self.config.output {
            LogOutput::Console => None,
            LogOutput::File | LogOutput::Both => Some(self.config.resolved_log_directory()),
        }
    }

    /// Get current log level
    pub fn log_level(&self) -> LogLevel {
        self.config.level
    }
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> LoggingResult<LoggingSystem> {
    LoggingSystem::init(LoggingConfig::default())
}

/// Initialize logging with custom configuration
pub fn init_logging(config: LoggingConfig) -> LoggingResult<LoggingSystem> {
    LoggingSystem::init(config)
}
