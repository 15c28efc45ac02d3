//! Directory-backed vault store.
//!
//! # Responsibility
//! - Map vault-relative paths onto one root directory.
//! - Provide the full-replace write guarantee the injection flow expects.
//!
//! # Invariants
//! - Every access stays inside the root (path validation runs before I/O).
//! - A write lands fully or leaves the previous content intact.

use super::{ensure_vault_relative, ArtifactKind, VaultError, VaultResult, VaultStore};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Vault store rooted at one host directory.
#[derive(Debug, Clone)]
pub struct DirVault {
    root: PathBuf,
}

impl DirVault {
    /// Opens a vault over an existing directory.
    ///
    /// # Errors
    /// - `NotFound` when nothing exists at `root`.
    /// - `NotAFolder` when `root` exists but is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> VaultResult<Self> {
        let root = root.into();
        let metadata = fs::metadata(&root).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                VaultError::NotFound(root.display().to_string())
            } else {
                io_error(&root.display().to_string(), err)
            }
        })?;
        if !metadata.is_dir() {
            return Err(VaultError::NotAFolder(root.display().to_string()));
        }

        Ok(Self { root })
    }

    /// Root directory backing this vault.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> VaultResult<PathBuf> {
        ensure_vault_relative(path)?;
        Ok(self.root.join(path))
    }
}

impl VaultStore for DirVault {
    fn kind(&self, path: &str) -> VaultResult<ArtifactKind> {
        let full = self.resolve(path)?;
        match fs::metadata(&full) {
            Ok(metadata) if metadata.is_file() => Ok(ArtifactKind::File),
            Ok(_) => Ok(ArtifactKind::Folder),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ArtifactKind::Missing),
            Err(err) => Err(io_error(path, err)),
        }
    }

    fn read(&self, path: &str) -> VaultResult<String> {
        let full = self.resolve(path)?;
        let metadata = match fs::metadata(&full) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(VaultError::NotFound(path.to_string()));
            }
            Err(err) => return Err(io_error(path, err)),
        };
        if !metadata.is_file() {
            return Err(VaultError::NotAFile(path.to_string()));
        }

        fs::read_to_string(&full).map_err(|err| io_error(path, err))
    }

    fn write(&self, path: &str, content: &str) -> VaultResult<()> {
        let full = self.resolve(path)?;
        if let Ok(metadata) = fs::metadata(&full) {
            if !metadata.is_file() {
                return Err(VaultError::NotAFile(path.to_string()));
            }
        }

        // Two-step replace: a crash between the steps leaves the previous
        // note content untouched. The staging name appends to the full
        // artifact name, so it can never alias another vault artifact.
        let mut staged_name = full.as_os_str().to_os_string();
        staged_name.push(".dailypick.tmp");
        let staged = PathBuf::from(staged_name);
        fs::write(&staged, content).map_err(|err| io_error(path, err))?;
        fs::rename(&staged, &full).map_err(|err| {
            let _ = fs::remove_file(&staged);
            io_error(path, err)
        })
    }
}

fn io_error(path: &str, source: io::Error) -> VaultError {
    VaultError::Io {
        path: path.to_string(),
        source,
    }
}
