use std::path::Path;

use tokio::runtime::Runtime;

use crate::{
    infra::{self, config, error::AppError, storage_layout::StorageLayout},
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    let guard = infra::logging::init(&context.config.logging, &context.layout)?;

    Ok(context.with_log_guard(guard))
}

/// Runtime hosting the conversation fetch. One worker is plenty for a
/// single request.
pub fn build_runtime() -> Result<Runtime, AppError> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("tripchat-fetch")
        .enable_all()
        .build()
        .map_err(AppError::RuntimeInit)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = config::load(config_path)?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout))
}
