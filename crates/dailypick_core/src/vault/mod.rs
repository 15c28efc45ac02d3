//! Vault storage contracts shared by host adapters.
//!
//! # Responsibility
//! - Define the kind/read/write contract the injection flow consumes.
//! - Validate vault-relative paths before any host I/O happens.
//!
//! # Invariants
//! - Paths are vault-relative: non-empty, not absolute, no traversal
//!   components.
//! - `write` fully replaces artifact content or leaves it unchanged.
//!
//! # See also
//! - docs/architecture/host-contract.md

pub mod dir;
pub mod memory;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Component, Path};

pub type VaultResult<T> = Result<T, VaultError>;

/// Artifact classification reported by a vault store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Plain file artifact.
    File,
    /// Directory or other non-file container.
    Folder,
    /// Nothing exists at the path.
    Missing,
}

impl ArtifactKind {
    /// Stable string form used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
            Self::Missing => "missing",
        }
    }
}

/// Vault access error shared by all store implementations.
#[derive(Debug)]
pub enum VaultError {
    /// Path is empty, absolute, or steps outside the vault.
    InvalidPath(String),
    /// No artifact exists at the path.
    NotFound(String),
    /// The artifact exists but is not a plain file.
    NotAFile(String),
    /// The artifact exists but is not a folder.
    NotAFolder(String),
    /// Underlying host I/O failure.
    Io { path: String, source: io::Error },
}

impl Display for VaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath(path) => {
                write!(f, "invalid vault path `{path}`: expected a relative path inside the vault")
            }
            Self::NotFound(path) => write!(f, "no artifact at vault path `{path}`"),
            Self::NotAFile(path) => {
                write!(f, "artifact at vault path `{path}` is not a plain file")
            }
            Self::NotAFolder(path) => write!(f, "artifact at `{path}` is not a folder"),
            Self::Io { path, source } => write!(f, "vault io failure at `{path}`: {source}"),
        }
    }
}

impl Error for VaultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Host file-store contract consumed by the injection flow.
///
/// All methods take `&self` so one store handle can be shared between the
/// host side (which creates notes) and the service side (which rewrites
/// them) within the single-threaded event model.
pub trait VaultStore {
    /// Reports what exists at a vault-relative path.
    fn kind(&self, path: &str) -> VaultResult<ArtifactKind>;
    /// Returns the full text content of a plain-file artifact.
    fn read(&self, path: &str) -> VaultResult<String>;
    /// Fully replaces artifact content, creating the artifact when absent.
    fn write(&self, path: &str, content: &str) -> VaultResult<()>;
}

/// Returns the base name component of a vault-relative path.
pub fn artifact_base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Rejects paths that could leave the vault or alias other artifacts.
pub(crate) fn ensure_vault_relative(path: &str) -> VaultResult<()> {
    if path.trim().is_empty() {
        return Err(VaultError::InvalidPath(path.to_string()));
    }

    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return Err(VaultError::InvalidPath(path.to_string()));
    }
    for component in candidate.components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(VaultError::InvalidPath(path.to_string())),
        }
    }

    Ok(())
}
