//! In-memory vault store for host-free tests and wiring checks.
//!
//! # Responsibility
//! - Mirror the directory vault contract without touching the filesystem.
//! - Let a test harness shape arbitrary artifact layouts, including
//!   wrong-kind paths.
//!
//! # Invariants
//! - Parent segments of any stored artifact report as folders.
//! - A read observes exactly the last fully written content.

use super::{ensure_vault_relative, ArtifactKind, VaultError, VaultResult, VaultStore};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Vault store holding artifacts in process memory.
///
/// Methods take `&self` like every vault store; interior mutability keeps
/// one handle shareable between the harness playing host and the service
/// under test.
#[derive(Debug, Default)]
pub struct MemoryVault {
    files: RefCell<BTreeMap<String, String>>,
    folders: RefCell<BTreeSet<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an explicit folder artifact at the path.
    pub fn create_folder(&self, path: &str) -> VaultResult<()> {
        ensure_vault_relative(path)?;
        self.folders.borrow_mut().insert(path.to_string());
        Ok(())
    }

    fn is_folder(&self, path: &str) -> bool {
        if self.folders.borrow().contains(path) {
            return true;
        }
        let prefix = format!("{path}/");
        self.files.borrow().keys().any(|name| name.starts_with(&prefix))
            || self.folders.borrow().iter().any(|name| name.starts_with(&prefix))
    }
}

impl VaultStore for MemoryVault {
    fn kind(&self, path: &str) -> VaultResult<ArtifactKind> {
        ensure_vault_relative(path)?;
        if self.files.borrow().contains_key(path) {
            return Ok(ArtifactKind::File);
        }
        if self.is_folder(path) {
            return Ok(ArtifactKind::Folder);
        }
        Ok(ArtifactKind::Missing)
    }

    fn read(&self, path: &str) -> VaultResult<String> {
        ensure_vault_relative(path)?;
        if let Some(content) = self.files.borrow().get(path) {
            return Ok(content.clone());
        }
        if self.is_folder(path) {
            return Err(VaultError::NotAFile(path.to_string()));
        }
        Err(VaultError::NotFound(path.to_string()))
    }

    fn write(&self, path: &str, content: &str) -> VaultResult<()> {
        ensure_vault_relative(path)?;
        if self.is_folder(path) {
            return Err(VaultError::NotAFile(path.to_string()));
        }
        self.files
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryVault;
    use crate::vault::{ArtifactKind, VaultError, VaultStore};

    #[test]
    fn missing_then_file_then_overwrite() {
        let vault = MemoryVault::new();
        assert_eq!(vault.kind("note.md").unwrap(), ArtifactKind::Missing);

        vault.write("note.md", "first").unwrap();
        assert_eq!(vault.kind("note.md").unwrap(), ArtifactKind::File);
        assert_eq!(vault.read("note.md").unwrap(), "first");

        vault.write("note.md", "second").unwrap();
        assert_eq!(vault.read("note.md").unwrap(), "second");
    }

    #[test]
    fn nested_artifacts_imply_folders() {
        let vault = MemoryVault::new();
        vault.write("lists/daily-items.md", "- a").unwrap();

        assert_eq!(vault.kind("lists").unwrap(), ArtifactKind::Folder);
        assert!(matches!(
            vault.read("lists").unwrap_err(),
            VaultError::NotAFile(_)
        ));
    }

    #[test]
    fn explicit_folder_blocks_file_write() {
        let vault = MemoryVault::new();
        vault.create_folder("2024-01-15.md").unwrap();

        assert_eq!(vault.kind("2024-01-15.md").unwrap(), ArtifactKind::Folder);
        assert!(matches!(
            vault.write("2024-01-15.md", "x").unwrap_err(),
            VaultError::NotAFile(_)
        ));
    }

    #[test]
    fn read_of_missing_artifact_is_not_found() {
        let vault = MemoryVault::new();
        assert!(matches!(
            vault.read("absent.md").unwrap_err(),
            VaultError::NotFound(_)
        ));
    }
}
