use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

/// Keeps the background log writer alive; logs are flushed when dropped.
pub type LogGuard = WorkerGuard;

/// Installs the global subscriber. The terminal belongs to the TUI, so events
/// go to a file. `RUST_LOG` overrides the configured level.
pub fn init(config: &LogConfig, layout: &StorageLayout) -> Result<LogGuard, AppError> {
    let log_file = match &config.file {
        Some(path) => path.clone(),
        None => {
            layout.ensure_dirs()?;
            layout.log_file()
        }
    };

    let (dir, file_name) = split_log_path(&log_file)?;
    std::fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr), AppError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::StoragePathResolution {
            details: format!("log path {} has no file name", path.display()),
        })?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok((dir, file_name))
}
