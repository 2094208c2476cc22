use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BIND_POINT: &str = "localhost:15000";
pub const DEFAULT_UPLOADS_DIR: &str = "./saved_files";
pub const DEFAULT_SAVED_DIR: &str = "./send_files";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_MAX_BODY_SIZE: usize = 64 * 1024 * 1024;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub server_bind_point: String,
    pub uploads_dir: PathBuf,
    pub saved_dir: PathBuf,
    pub log_level: String,
    /// Upper bound on request bodies, in bytes.
    pub max_body_size: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            server_bind_point: DEFAULT_BIND_POINT.to_string(),
            uploads_dir: PathBuf::from(DEFAULT_UPLOADS_DIR),
            saved_dir: PathBuf::from(DEFAULT_SAVED_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}
