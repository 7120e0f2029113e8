//! JSON-file roster backend.
//!
//! Stores the record collection as a single pretty-printed JSON array on
//! disk. Every fetch re-reads the file and every update rewrites it, so
//! edits made out-of-band (another process, a text editor) show up on
//! the next refresh.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{AttendanceBackend, BackendError};
use crate::records::{AttendanceStatus, Record};

pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the roster file exists, seeding a starter roster when
    /// `seed` is set. Creates parent directories as needed.
    pub async fn ensure_roster(&self, seed: bool) -> Result<(), BackendError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let records = if seed { Self::seed_records() } else { Vec::new() };
        self.write_roster(&records).await
    }

    async fn read_roster(&self) -> Result<Vec<Record>, BackendError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        Ok(records)
    }

    async fn write_roster(&self, records: &[Record]) -> Result<(), BackendError> {
        let content = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Starter roster written on first run so the board is not empty.
    fn seed_records() -> Vec<Record> {
        ["Anna Fischer", "Jonas Weber", "Lena Hoffmann", "Max Becker", "Sofia Wagner"]
            .into_iter()
            .map(|name| {
                Record::new(
                    Uuid::new_v4().to_string(),
                    name.to_string(),
                    AttendanceStatus::Unexcused,
                )
            })
            .collect()
    }
}

#[async_trait]
impl AttendanceBackend for JsonFileBackend {
    async fn fetch_records(&self) -> Result<Vec<Record>, BackendError> {
        self.read_roster().await
    }

    async fn update_status(
        &self,
        record_id: &str,
        new_status: AttendanceStatus,
        reason: &str,
    ) -> Result<(), BackendError> {
        let mut records = self.read_roster().await?;
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| BackendError::NotFound(record_id.to_string()))?;

        record.status = new_status;
        record.reason = if reason.is_empty() {
            None
        } else {
            Some(reason.to_string())
        };
        record.updated_at = Utc::now();

        self.write_roster(&records).await
    }
}
