//! Core domain logic for Daily Pick.
//! This crate is the single source of truth for injection invariants.

pub mod daily_note;
pub mod events;
pub mod logging;
pub mod manifest;
pub mod rotation;
pub mod service;
pub mod settings;
pub mod vault;

pub use daily_note::is_daily_note_name;
pub use events::{SubscriptionId, VaultEventHub};
pub use logging::{default_log_level, init_logging, logging_status};
pub use manifest::{extension_manifest, ExtensionManifest, ManifestValidationError};
pub use rotation::rotator::{select, Selection};
pub use rotation::source_list::parse_source_items;
pub use service::daily_pick::{
    compose_injection, DailyPickService, InjectionOutcome, ServiceError, ServiceResult,
};
pub use settings::store::{
    JsonSettingsStore, MemorySettingsStore, SettingsResult, SettingsStore, SettingsStoreError,
};
pub use settings::{DailyPickSettings, DEFAULT_SOURCE_FILE_PATH};
pub use vault::dir::DirVault;
pub use vault::memory::MemoryVault;
pub use vault::{artifact_base_name, ArtifactKind, VaultError, VaultResult, VaultStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, extension_manifest};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn manifest_version_matches_crate_version() {
        assert_eq!(extension_manifest().version, core_version());
    }
}
