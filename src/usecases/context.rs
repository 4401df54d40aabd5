use crate::infra::{config::AppConfig, logging::LogGuard, storage_layout::StorageLayout};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub layout: StorageLayout,
    log_guard: Option<LogGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, layout: StorageLayout) -> Self {
        Self {
            config,
            layout,
            log_guard: None,
        }
    }

    pub fn with_log_guard(mut self, guard: LogGuard) -> Self {
        self.log_guard = Some(guard);
        self
    }

    pub fn has_file_logging(&self) -> bool {
        self.log_guard.is_some()
    }
}
