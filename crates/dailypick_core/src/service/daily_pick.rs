//! Daily note injection use-case service.
//!
//! # Responsibility
//! - React to artifact creation with the full injection flow: recognize the
//!   daily note, pick the rotation item, rewrite the note, persist the
//!   advanced position.
//! - Expose the settings surface the host configuration panel drives.
//!
//! # Invariants
//! - Every created path resolves to exactly one [`InjectionOutcome`].
//! - The persisted rotation position advances only when the note write and
//!   the settings save both succeeded.
//! - Log lines carry paths and positions, never note or item text.
//!
//! # See also docs/architecture/rotation-flow.md

use crate::daily_note::is_daily_note_name;
use crate::rotation::rotator::select;
use crate::rotation::source_list::parse_source_items;
use crate::settings::store::{SettingsStore, SettingsStoreError};
use crate::settings::DailyPickSettings;
use crate::vault::{artifact_base_name, ArtifactKind, VaultError, VaultStore};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Resolution of one artifact creation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectionOutcome {
    /// Item injected; the persisted rotation position advanced.
    Injected { item: String, next_position: u64 },
    /// Created artifact is not a daily note file.
    SkippedNotDailyNote,
    /// Configured source path does not resolve to a file.
    SkippedSourceUnavailable,
    /// Source file parsed to zero items.
    SkippedEmptySource,
    /// Injection aborted; the rotation position is unchanged.
    Failed { message: String },
}

/// Internal service errors.
#[derive(Debug)]
pub enum ServiceError {
    Vault(VaultError),
    Settings(SettingsStoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vault(err) => write!(f, "vault operation failed: {err}"),
            Self::Settings(err) => write!(f, "settings persistence failed: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vault(err) => Some(err),
            Self::Settings(err) => Some(err),
        }
    }
}

impl From<VaultError> for ServiceError {
    fn from(err: VaultError) -> Self {
        Self::Vault(err)
    }
}

impl From<SettingsStoreError> for ServiceError {
    fn from(err: SettingsStoreError) -> Self {
        Self::Settings(err)
    }
}

/// Use-case service for daily note injection.
///
/// Borrows the vault for its whole lifetime so the host keeps ownership of
/// the storage handle.
pub struct DailyPickService<'v, V: VaultStore, S: SettingsStore> {
    vault: &'v V,
    settings_store: S,
    settings: DailyPickSettings,
}

impl<'v, V: VaultStore, S: SettingsStore> DailyPickService<'v, V, S> {
    /// Creates a service by loading settings from the store.
    ///
    /// # Errors
    /// - Returns the store error when the persisted record cannot be read
    ///   or parsed. A missing record is not an error; the store falls back
    ///   to defaults.
    pub fn new(vault: &'v V, settings_store: S) -> ServiceResult<Self> {
        let settings = match settings_store.load() {
            Ok(settings) => settings,
            Err(err) => {
                error!(
                    "event=settings_load module=service status=error error_code=settings_load_failed error={err}"
                );
                return Err(ServiceError::Settings(err));
            }
        };
        info!(
            "event=settings_load module=service status=ok source_path={} position={}",
            settings.source_file_path, settings.current_index
        );
        Ok(Self {
            vault,
            settings_store,
            settings,
        })
    }

    /// Returns the active settings record.
    pub fn settings(&self) -> &DailyPickSettings {
        &self.settings
    }

    /// Returns the rotation position the next injection will use.
    pub fn current_position(&self) -> u64 {
        self.settings.current_index
    }

    /// Points the rotation at a different source file and persists the
    /// change. The rotation position is left as is.
    pub fn set_source_path(&mut self, path: impl Into<String>) -> ServiceResult<()> {
        self.settings.source_file_path = path.into();
        self.persist_settings("source_path")
    }

    /// Restarts the rotation from the first item and persists the change.
    pub fn reset_cycle(&mut self) -> ServiceResult<()> {
        self.settings.current_index = 0;
        self.persist_settings("position")
    }

    fn persist_settings(&self, field: &str) -> ServiceResult<()> {
        match self.settings_store.save(&self.settings) {
            Ok(()) => {
                info!(
                    "event=settings_update module=service status=ok field={field} source_path={} position={}",
                    self.settings.source_file_path, self.settings.current_index
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=settings_update module=service status=error field={field} error_code=settings_save_failed error={err}"
                );
                Err(ServiceError::Settings(err))
            }
        }
    }

    /// Handles one artifact creation event end to end.
    ///
    /// Never propagates an error to the host event loop; failures come back
    /// as [`InjectionOutcome::Failed`] after being logged.
    pub fn handle_created(&mut self, path: &str) -> InjectionOutcome {
        let started_at = Instant::now();
        match self.try_handle_created(path) {
            Ok(outcome) => {
                if let InjectionOutcome::Injected { next_position, .. } = &outcome {
                    info!(
                        "event=daily_note_inject module=service status=ok note_path={} next_position={} duration_ms={}",
                        path,
                        next_position,
                        started_at.elapsed().as_millis()
                    );
                }
                outcome
            }
            Err(err) => {
                error!(
                    "event=daily_note_inject module=service status=error note_path={} duration_ms={} error_code={} error={}",
                    path,
                    started_at.elapsed().as_millis(),
                    error_code(&err),
                    err
                );
                InjectionOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Result-shaped variant of [`Self::handle_created`] for callers that
    /// want the underlying error instead of an outcome with a message.
    pub fn try_handle_created(&mut self, path: &str) -> ServiceResult<InjectionOutcome> {
        if !is_daily_note_name(artifact_base_name(path)) {
            return Ok(InjectionOutcome::SkippedNotDailyNote);
        }
        if self.vault.kind(path)? != ArtifactKind::File {
            return Ok(InjectionOutcome::SkippedNotDailyNote);
        }

        let source_path = self.settings.source_file_path.clone();
        let source_kind = match self.vault.kind(&source_path) {
            Ok(kind) => kind,
            // A malformed configured path counts as unavailable, not as a
            // failure of this event.
            Err(VaultError::InvalidPath(_)) => ArtifactKind::Missing,
            Err(err) => return Err(err.into()),
        };
        if source_kind != ArtifactKind::File {
            error!(
                "event=source_resolve module=service status=error source_path={} kind={} error_code=source_unavailable",
                source_path,
                source_kind.as_str()
            );
            return Ok(InjectionOutcome::SkippedSourceUnavailable);
        }

        let items = parse_source_items(&self.vault.read(&source_path)?);
        let Some(selection) = select(&items, self.settings.current_index) else {
            return Ok(InjectionOutcome::SkippedEmptySource);
        };

        let current = self.vault.read(path)?;
        self.vault
            .write(path, &compose_injection(&selection.item, &current))?;

        let mut advanced = self.settings.clone();
        advanced.current_index = selection.next_position;
        self.settings_store.save(&advanced)?;
        // The advanced position reaches memory only once it is persisted.
        self.settings = advanced;

        Ok(InjectionOutcome::Injected {
            item: selection.item,
            next_position: selection.next_position,
        })
    }
}

/// Builds the note content with `item` as the leading paragraph.
pub fn compose_injection(item: &str, current: &str) -> String {
    format!("{item}\n\n{current}")
}

fn error_code(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::Vault(_) => "vault_io",
        ServiceError::Settings(_) => "settings_save_failed",
    }
}
