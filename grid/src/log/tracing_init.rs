// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_appender::rolling::{Builder, RollingFileAppender, Rotation};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt,
                         util::SubscriberInitExt};

use super::{TracingConfig, WriterConfig};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set, can't be unset or changed. This is what
/// the `grid` binary uses.
///
/// Logging is **DISABLED** by **default**. If you don't call this function w/ a value
/// other than [`LevelFilter::OFF`], then the [`tracing::debug!`], etc. calls in this
/// crate go nowhere.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    let Some(layer) = try_create_file_layer(&it)? else {
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber. This is great for tests, since each test can have its own
/// log file. Logging stops when the returned guard is dropped.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    let Some(layer) = try_create_file_layer(&it)? else {
        return Ok(None);
    };

    let subscriber = tracing_subscriber::registry().with(layer);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// This erases the concrete type of the writer, and returns a boxed layer. Returns
/// `None` when logging is turned off.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Box<DynLayer<Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    if matches!(level_filter, LevelFilter::OFF) {
        return Ok(None);
    }

    let WriterConfig::File(ref file_path) = tracing_config.writer_config else {
        return Ok(None);
    };

    let file = try_create_file_appender(file_path)?;
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(file)
        .with_filter(level_filter);

    Ok(Some(Box::new(layer)))
}

/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's an
/// example of that:
/// `tracing_appender::non_blocking(try_create_file_appender("foo")?)`
///
/// # Errors
///
/// Returns an error if the parent folder can't be accessed, or the file can't be
/// opened for appending.
pub fn try_create_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().and_then(|it| it.to_str()).ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Builder::new()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_file_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "r3bl_grid_log_{}_{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("grid_test.log")
    }

    #[test]
    fn test_logging_off_creates_nothing() {
        let config = TracingConfig::default();
        assert!(try_create_file_layer(&config).unwrap().is_none());
        assert!(try_initialize_logging_thread_local(config).unwrap().is_none());
    }

    #[test]
    fn test_thread_local_logging_writes_file() {
        let file_path = temp_log_file_path("thread_local");
        let file_path_str = file_path.to_str().unwrap();

        let config = TracingConfig::new_file(Some(file_path_str), LevelFilter::DEBUG);
        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());

        tracing::debug!(message = "hello from the grid test");
        drop(guard);

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("hello from the grid test"));
        std::fs::remove_file(&file_path).ok();
    }
}
