//! Core record types for the attendance board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendance status of a trainee. Each status corresponds to one lane
/// on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Unexcused,
    Present,
    Excused,
}

impl AttendanceStatus {
    /// All statuses in lane order (left to right).
    pub const ALL: [AttendanceStatus; 3] = [Self::Unexcused, Self::Present, Self::Excused];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unexcused => "unexcused",
            Self::Present => "present",
            Self::Excused => "excused",
        }
    }

    /// Lane header title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Unexcused => "Unexcused",
            Self::Present => "Present",
            Self::Excused => "Excused",
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unexcused" => Ok(Self::Unexcused),
            "present" => Ok(Self::Present),
            "excused" => Ok(Self::Excused),
            other => Err(format!(
                "unknown status '{other}': use unexcused, present, excused"
            )),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single trainee record. The status field determines which lane the
/// record appears in; everything else is opaque to the board core and
/// only mutated by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub status: AttendanceStatus,
    /// Justification captured when the record was last moved into a
    /// gated lane. Cleared by the backend on other moves.
    #[serde(default)]
    pub reason: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(id: String, name: String, status: AttendanceStatus) -> Self {
        Self {
            id,
            name,
            status,
            reason: None,
            updated_at: Utc::now(),
        }
    }
}
