use crate::model::configuration::{
    Configuration, DEFAULT_BIND_POINT, DEFAULT_LOG_LEVEL, DEFAULT_MAX_BODY_SIZE,
    DEFAULT_SAVED_DIR, DEFAULT_UPLOADS_DIR,
};
use crate::shared::constants::CONFIG_DIRECTORY;
use std::path::{Path, PathBuf};

const CONFIGURATION_FILE_NAME: &str = "config.toml";

pub fn initialize() -> anyhow::Result<Configuration> {
    load_from(Path::new(CONFIG_DIRECTORY))
}

/// Reads `config.toml` from `directory`. When the file does not exist yet, the
/// configuration is built from environment variables and written there so the
/// next start picks it up.
pub fn load_from(directory: &Path) -> anyhow::Result<Configuration> {
    if !directory.exists() {
        std::fs::create_dir_all(directory)?;
    }

    let configuration_path = directory.join(CONFIGURATION_FILE_NAME);
    if !configuration_path.exists() {
        let configuration = from_environment()?;
        let serialized_toml = toml::to_string_pretty(&configuration)?;
        std::fs::write(&configuration_path, serialized_toml)?;
        tracing::debug!(
            "Wrote initial configuration to {}",
            configuration_path.display()
        );
        Ok(configuration)
    } else {
        let toml = std::fs::read_to_string(&configuration_path)?;
        let deserialized_toml = toml::from_str::<Configuration>(&toml)?;
        Ok(deserialized_toml)
    }
}

fn from_environment() -> anyhow::Result<Configuration> {
    let max_body_size = match std::env::var("MAX_BODY_SIZE") {
        Ok(value) => value.parse::<usize>()?,
        Err(_) => DEFAULT_MAX_BODY_SIZE,
    };

    Ok(Configuration {
        server_bind_point: env_or("SERVER_BIND_POINT", DEFAULT_BIND_POINT),
        uploads_dir: PathBuf::from(env_or("UPLOADS_DIR", DEFAULT_UPLOADS_DIR)),
        saved_dir: PathBuf::from(env_or("SAVED_DIR", DEFAULT_SAVED_DIR)),
        log_level: env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        max_body_size,
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
