//! Backend abstraction for the attendance roster.
//!
//! This module defines the contract the board core consumes: fetch the
//! full record collection, and apply one status change. Everything else
//! (how records are persisted, where the roster lives) is a backend
//! concern.

use async_trait::async_trait;

use crate::records::{AttendanceStatus, Record};

pub mod factory;
pub mod json_file;

pub use factory::create_backend;
pub use json_file::JsonFileBackend;

/// Common error type for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidData(err.to_string())
    }
}

/// The roster store the board talks to.
///
/// `update_status` is the only mutation; the board never patches records
/// locally and re-fetches the whole collection after every commit.
#[async_trait]
pub trait AttendanceBackend: Send + Sync {
    /// Fetch the current record collection.
    async fn fetch_records(&self) -> Result<Vec<Record>, BackendError>;

    /// Change one record's status. `reason` is empty unless the target
    /// status requires a justification.
    async fn update_status(
        &self,
        record_id: &str,
        new_status: AttendanceStatus,
        reason: &str,
    ) -> Result<(), BackendError>;
}
