use crate::model::configuration::Configuration;
use crate::model::errors::TransferError;
use std::path::{Component, Path, PathBuf};

/// Creates both storage roots. Roots that already exist are left alone.
pub fn ensure_storage_roots(configuration: &Configuration) -> std::io::Result<()> {
    for root in [&configuration.uploads_dir, &configuration.saved_dir] {
        std::fs::create_dir_all(root)?;
        tracing::info!("Storage root ready: {}", root.display());
    }
    Ok(())
}

/// Joins `filename` onto `root`.
///
/// Only a single plain path component is accepted, so a caller can never
/// address anything outside of `root`.
pub fn resolve(root: &Path, filename: &str, field: &'static str) -> Result<PathBuf, TransferError> {
    if filename.is_empty() || filename.contains(['/', '\\']) {
        return Err(TransferError::FieldInvalid(field));
    }

    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Ok(root.join(name)),
        _ => Err(TransferError::FieldInvalid(field)),
    }
}
