//! Data types shared by the panel, the HTTP client and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A design document persisted on the sync backend.
///
/// Snapshots come straight from the listing service and are never mutated
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncedProject {
    pub id: String,
    pub filename: String,
    /// Where the document payload can be downloaded from.
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

impl SyncedProject {
    /// Last modification rendered in the local timezone.
    pub fn updated_at_local(&self) -> String {
        self.updated_at
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string()
    }
}

/// Body of a project upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub filename: String,
    pub content: serde_json::Value,
}

/// A blocking, user-facing message raised by a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The selected project could not be downloaded or loaded.
    OpenFailed { filename: String, detail: String },
    /// A document was generated, loaded and saved to the synced files.
    GenerationSucceeded { filename: String },
    GenerationFailed { detail: String },
}

impl Notice {
    /// Diagnostic detail attached to the notice, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Notice::OpenFailed { detail, .. } | Notice::GenerationFailed { detail } => {
                Some(detail)
            }
            Notice::GenerationSucceeded { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::GenerationSucceeded { .. })
    }
}
