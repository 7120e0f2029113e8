//! Backend factory for creating backend instances from configuration.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};

use super::{AttendanceBackend, JsonFileBackend};
use crate::config::Config;

/// Create the roster backend described by the configuration.
///
/// Currently only the JSON-file backend exists; the roster path comes
/// from `board.roster_path` or falls back to the platform data
/// directory. The file is seeded on first run when `board.seed_roster`
/// is enabled.
///
/// # Errors
/// Returns an error when the data directory cannot be determined or the
/// roster file cannot be created.
pub async fn create_backend(config: &Config) -> Result<Arc<dyn AttendanceBackend>> {
    let path = roster_path(config)?;
    let backend = JsonFileBackend::new(path);
    backend
        .ensure_roster(config.board.seed_roster)
        .await
        .with_context(|| format!("Failed to prepare roster file: {}", backend.path().display()))?;
    Ok(Arc::new(backend))
}

/// Resolve the roster file path from config, defaulting to
/// `<data_dir>/presentist/roster.json`.
pub fn roster_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.board.roster_path {
        return Ok(PathBuf::from(path));
    }
    dirs::data_dir()
        .ok_or_else(|| anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("presentist").join("roster.json"))
}
