//! Extension manifest declaration and validation.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Capability string for artifact creation event delivery.
pub const CAPABILITY_VAULT_EVENTS: &str = "vault.events";
/// Capability string for vault artifact reads.
pub const CAPABILITY_VAULT_READ: &str = "vault.read";
/// Capability string for vault artifact writes.
pub const CAPABILITY_VAULT_WRITE: &str = "vault.write";
/// Capability string for persisted settings access.
pub const CAPABILITY_SETTINGS: &str = "settings";

const SUPPORTED_CAPABILITIES: &[&str] = &[
    CAPABILITY_VAULT_EVENTS,
    CAPABILITY_VAULT_READ,
    CAPABILITY_VAULT_WRITE,
    CAPABILITY_SETTINGS,
];

/// Returns supported capability strings for manifest validation.
pub fn supported_capabilities() -> &'static [&'static str] {
    SUPPORTED_CAPABILITIES
}

/// Declarative extension manifest.
///
/// Hosts read this record to decide what the extension may touch before
/// wiring it up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionManifest {
    /// Stable extension identifier, e.g. `community.dailypick`.
    pub id: String,
    /// Human-readable extension name shown by the host.
    pub name: String,
    /// Manifest semantic version string (`major.minor.patch`).
    pub version: String,
    /// Declared capabilities (`vault.events|vault.read|vault.write|settings`).
    pub capabilities: Vec<String>,
}

impl ExtensionManifest {
    /// Validates declaration-level manifest invariants.
    pub fn validate(&self) -> Result<(), ManifestValidationError> {
        if self.id.trim().is_empty() {
            return Err(ManifestValidationError::EmptyId);
        }
        if !is_valid_extension_id(self.id.trim()) {
            return Err(ManifestValidationError::InvalidId(self.id.clone()));
        }

        if self.name.trim().is_empty() {
            return Err(ManifestValidationError::EmptyName);
        }

        if self.version.trim().is_empty() {
            return Err(ManifestValidationError::EmptyVersion);
        }
        if !is_semver_triplet(self.version.trim()) {
            return Err(ManifestValidationError::InvalidVersion(
                self.version.clone(),
            ));
        }

        if self.capabilities.is_empty() {
            return Err(ManifestValidationError::MissingCapabilities);
        }

        let mut dedup = BTreeSet::<String>::new();
        for capability in &self.capabilities {
            let normalized = capability.trim();
            if normalized.is_empty() {
                return Err(ManifestValidationError::EmptyCapability);
            }
            if !supported_capabilities().contains(&normalized) {
                return Err(ManifestValidationError::UnsupportedCapability(
                    normalized.to_string(),
                ));
            }
            if !dedup.insert(normalized.to_string()) {
                return Err(ManifestValidationError::DuplicateCapability(
                    normalized.to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Returns the manifest this crate ships under.
pub fn extension_manifest() -> ExtensionManifest {
    ExtensionManifest {
        id: "community.dailypick".to_string(),
        name: "Daily Pick".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        capabilities: vec![
            CAPABILITY_VAULT_EVENTS.to_string(),
            CAPABILITY_VAULT_READ.to_string(),
            CAPABILITY_VAULT_WRITE.to_string(),
            CAPABILITY_SETTINGS.to_string(),
        ],
    }
}

fn is_valid_extension_id(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }

    let mut prev_separator = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
            continue;
        }
        if c == '.' || c == '_' || c == '-' {
            if prev_separator {
                return false;
            }
            prev_separator = true;
            continue;
        }
        return false;
    }
    !prev_separator
}

fn is_semver_triplet(value: &str) -> bool {
    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() != 3 {
        return false;
    }
    parts
        .iter()
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// Internal manifest validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestValidationError {
    EmptyId,
    InvalidId(String),
    EmptyName,
    EmptyVersion,
    InvalidVersion(String),
    MissingCapabilities,
    EmptyCapability,
    UnsupportedCapability(String),
    DuplicateCapability(String),
}

impl Display for ManifestValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "manifest id must not be empty"),
            Self::InvalidId(value) => write!(f, "manifest id is invalid: {value}"),
            Self::EmptyName => write!(f, "manifest name must not be empty"),
            Self::EmptyVersion => write!(f, "manifest version must not be empty"),
            Self::InvalidVersion(value) => write!(
                f,
                "manifest version is invalid: {value} (expected major.minor.patch)"
            ),
            Self::MissingCapabilities => write!(f, "manifest capabilities must not be empty"),
            Self::EmptyCapability => write!(f, "manifest contains empty capability value"),
            Self::UnsupportedCapability(value) => {
                write!(f, "manifest capability is unsupported: {value}")
            }
            Self::DuplicateCapability(value) => {
                write!(f, "manifest capability is duplicated: {value}")
            }
        }
    }
}

impl Error for ManifestValidationError {}

#[cfg(test)]
mod tests {
    use super::{
        extension_manifest, ExtensionManifest, ManifestValidationError, CAPABILITY_SETTINGS,
        CAPABILITY_VAULT_EVENTS,
    };

    fn valid_manifest() -> ExtensionManifest {
        ExtensionManifest {
            id: "community.dailypick".to_string(),
            name: "Daily Pick".to_string(),
            version: "0.1.0".to_string(),
            capabilities: vec![
                CAPABILITY_VAULT_EVENTS.to_string(),
                CAPABILITY_SETTINGS.to_string(),
            ],
        }
    }

    #[test]
    fn validates_baseline_manifest() {
        let manifest = valid_manifest();
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn built_in_manifest_is_valid() {
        assert!(extension_manifest().validate().is_ok());
    }

    #[test]
    fn rejects_missing_capabilities() {
        let mut manifest = valid_manifest();
        manifest.capabilities.clear();
        let err = manifest.validate().unwrap_err();
        assert_eq!(err, ManifestValidationError::MissingCapabilities);
    }

    #[test]
    fn rejects_duplicate_capabilities() {
        let mut manifest = valid_manifest();
        manifest.capabilities.push(CAPABILITY_SETTINGS.to_string());
        let err = manifest.validate().unwrap_err();
        assert_eq!(
            err,
            ManifestValidationError::DuplicateCapability(CAPABILITY_SETTINGS.to_string())
        );
    }

    #[test]
    fn rejects_unsupported_capabilities() {
        let mut manifest = valid_manifest();
        manifest.capabilities.push("workspace.layout".to_string());
        let err = manifest.validate().unwrap_err();
        assert_eq!(
            err,
            ManifestValidationError::UnsupportedCapability("workspace.layout".to_string())
        );
    }

    #[test]
    fn rejects_empty_name() {
        let mut manifest = valid_manifest();
        manifest.name = "   ".to_string();
        let err = manifest.validate().unwrap_err();
        assert_eq!(err, ManifestValidationError::EmptyName);
    }

    #[test]
    fn rejects_invalid_id_format() {
        let mut manifest = valid_manifest();
        manifest.id = "Daily Pick".to_string();
        let err = manifest.validate().unwrap_err();
        assert!(matches!(err, ManifestValidationError::InvalidId(_)));
    }

    #[test]
    fn rejects_invalid_version_format() {
        let mut manifest = valid_manifest();
        manifest.version = "v1".to_string();
        let err = manifest.validate().unwrap_err();
        assert!(matches!(err, ManifestValidationError::InvalidVersion(_)));
    }
}
