use std::{fs, io, path::Path};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Reads the TOML file at `path` (default `./config.toml`) and layers it over
/// [`AppConfig::default`]. A missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));

    let raw = match fs::read_to_string(config_path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(AppError::ConfigRead {
                path: config_path.to_path_buf(),
                source,
            });
        }
    };

    parse(&raw, config_path)
}

fn parse(raw: &str, origin: &Path) -> Result<AppConfig, AppError> {
    let file_config: FileConfig =
        toml::from_str(raw).map_err(|source| AppError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })?;

    let mut config = AppConfig::default();
    file_config.merge_into(&mut config);
    Ok(config)
}
