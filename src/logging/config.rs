//! Logging settings, as stored under the `logging` key of the settings file

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Log line encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Console,
    File,
    Both,
}

/// Terminal stream used by console output.
///
/// Stderr by default: hosts such as `maplink` print their results on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stderr,
    Stdout,
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub console_stream: ConsoleStream,
    /// Rolling log file location; [`default_log_directory`] when unset
    pub log_directory: Option<PathBuf>,
    /// Per-target overrides, e.g. `"map_launcher::link" => Debug`
    pub module_levels: HashMap<String, LogLevel>,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    pub fn with_console_stream(mut self, stream: ConsoleStream) -> Self {
        self.console_stream = stream;
        self
    }

    pub fn with_log_directory(mut self, dir: PathBuf) -> Self {
        self.log_directory = Some(dir);
        self
    }

    pub fn with_module_level(mut self, module: impl Into<String>, level: LogLevel) -> Self {
        self.module_levels.insert(module.into(), level);
        self
    }

    /// Directory the file layer writes to
    pub fn resolved_log_directory(&self) -> PathBuf {
        self.log_directory
            .clone()
            .unwrap_or_else(default_log_directory)
    }
}

/// Per-user log directory, falling back to `./logs`
pub fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("MapLauncher").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
