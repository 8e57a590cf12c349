// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging. The terminal belongs to the grid while the app is
/// running, so the only display option is a log file.
///
/// Logging is **DISABLED** by **default**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String /* tracing_log_file_path */),
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(maybe_file_path: Option<&str>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                maybe_file_path.unwrap_or(DEFAULT_LOG_FILE_NAME).to_string(),
            ),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter {
        match self.writer_config {
            WriterConfig::None => LevelFilter::OFF,
            WriterConfig::File(_) => self.level_filter,
        }
    }
}

/// `try_initialize_logging_global(LevelFilter::DEBUG)` logs to [`DEFAULT_LOG_FILE_NAME`].
impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self { Self::new_file(None, level_filter) }
}
