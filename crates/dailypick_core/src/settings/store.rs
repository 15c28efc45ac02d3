//! Settings persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the load/save contract the service depends on.
//! - Provide a JSON-artifact store and an in-memory store.
//!
//! # Invariants
//! - `load` returns defaults when no record was persisted yet.
//! - `save` replaces the record fully or leaves the previous one intact.

use crate::settings::DailyPickSettings;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub type SettingsResult<T> = Result<T, SettingsStoreError>;

/// Settings persistence error.
#[derive(Debug)]
pub enum SettingsStoreError {
    Io {
        path: String,
        source: io::Error,
    },
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl Display for SettingsStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "settings store io failure at `{path}`: {source}")
            }
            Self::Json { path, source } => {
                write!(f, "invalid settings record at `{path}`: {source}")
            }
        }
    }
}

impl Error for SettingsStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Persistence contract for the settings record.
pub trait SettingsStore {
    /// Loads the persisted record, falling back to defaults when absent.
    fn load(&self) -> SettingsResult<DailyPickSettings>;
    /// Persists the full record immediately.
    fn save(&self, settings: &DailyPickSettings) -> SettingsResult<()>;
}

/// Settings store backed by one JSON artifact.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Creates a store over the given artifact path.
    ///
    /// The artifact does not need to exist yet; the first `save` creates it
    /// along with missing parent directories.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Artifact path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SettingsStoreError {
        SettingsStoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> SettingsStoreError {
        SettingsStoreError::Json {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> SettingsResult<DailyPickSettings> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(DailyPickSettings::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        serde_json::from_str(&text).map_err(|err| self.json_error(err))
    }

    fn save(&self, settings: &DailyPickSettings) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let text = serde_json::to_string_pretty(settings).map_err(|err| self.json_error(err))?;

        // Two-step replace keeps the previous record readable if the process
        // dies mid-write. The staging name appends to the record name, so a
        // neighboring file in the same directory is never shadowed.
        let mut staged_name = self.path.as_os_str().to_os_string();
        staged_name.push(".tmp");
        let staged = PathBuf::from(staged_name);
        fs::write(&staged, text).map_err(|err| self.io_error(err))?;
        fs::rename(&staged, &self.path).map_err(|err| {
            let _ = fs::remove_file(&staged);
            self.io_error(err)
        })
    }
}

/// In-memory settings store for host-free wiring and tests.
///
/// Cloned handles share the same record, so a test harness can keep one
/// handle while the service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    record: Rc<RefCell<Option<DailyPickSettings>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last saved record, or `None` when nothing was saved.
    pub fn persisted(&self) -> Option<DailyPickSettings> {
        self.record.borrow().clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> SettingsResult<DailyPickSettings> {
        Ok(self.record.borrow().clone().unwrap_or_default())
    }

    fn save(&self, settings: &DailyPickSettings) -> SettingsResult<()> {
        *self.record.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}
