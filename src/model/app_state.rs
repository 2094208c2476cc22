use crate::model::configuration::Configuration;
use std::path::PathBuf;
use std::sync::Arc;

/// The two storage roots, fixed at startup.
#[derive(Debug, Clone)]
pub struct StorageRoots {
    /// Where uploaded files are written.
    pub uploads_dir: PathBuf,
    /// Where downloadable files are read from.
    pub saved_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageRoots>,
    /// Upper bound on request bodies, in bytes.
    pub max_body_size: usize,
}

impl AppState {
    pub fn new(uploads_dir: PathBuf, saved_dir: PathBuf, max_body_size: usize) -> Self {
        AppState {
            storage: Arc::new(StorageRoots {
                uploads_dir,
                saved_dir,
            }),
            max_body_size,
        }
    }
}

impl From<&Configuration> for AppState {
    fn from(configuration: &Configuration) -> Self {
        AppState::new(
            configuration.uploads_dir.clone(),
            configuration.saved_dir.clone(),
            configuration.max_body_size,
        )
    }
}
