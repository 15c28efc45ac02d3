//! Rotation settings record.
//!
//! # Responsibility
//! - Define the persisted configuration shared by the injection flow and the
//!   settings surface.
//! - Keep serde field naming aligned with the host's settings record.
//!
//! # Invariants
//! - `current_index` only grows, except through an explicit cycle reset.
//! - Fields missing from persisted data fall back to their defaults on load.
//!
//! # See also
//! - docs/architecture/host-contract.md

pub mod store;

use serde::{Deserialize, Serialize};

/// Default vault-relative path of the item source artifact.
pub const DEFAULT_SOURCE_FILE_PATH: &str = "lists/daily-items.md";

/// Persisted configuration for the daily-pick rotation.
///
/// Serialized with the host's camelCase field names so records written by
/// earlier versions keep loading unchanged. Unknown fields are ignored on
/// load, which keeps future field additions backward compatible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyPickSettings {
    /// Vault-relative path of the artifact holding the rotation items.
    pub source_file_path: String,
    /// Raw monotonically increasing rotation position, read modulo the item
    /// count on every injection.
    pub current_index: u64,
}

impl Default for DailyPickSettings {
    fn default() -> Self {
        Self {
            source_file_path: DEFAULT_SOURCE_FILE_PATH.to_string(),
            current_index: 0,
        }
    }
}
