//! Sync Report
//!
//! Result of asking the backend to pull orders from the marketplaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    pub message: String,
    /// Per-platform summary; its shape belongs to the sync jobs
    #[serde(default)]
    pub result: serde_json::Value,
}
