/*
 * Reads and writes the durable JSON settings for a given scope. The empty scope
 * is the global settings file; other scopes are per-module subdirectories.
 *
 * It uses a trait-based approach (`SettingsStoreOperations`) so the view-model,
 * the persist-and-notify cycle and the commands can be exercised against mock
 * stores. The concrete implementation (`CoreSettingsStore`) keeps the files
 * under the per-user local configuration directory, or under an explicit root
 * directory when one is supplied.
 */
use crate::app_logic::constants::{APP_NAME, SETTINGS_FILE_NAME};
use crate::core::models::GeneralSettings;
use crate::core::path_utils;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum SettingsStoreError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoConfigDirectory,
    InvalidScope(String),
}

impl From<io::Error> for SettingsStoreError {
    fn from(err: io::Error) -> Self {
        SettingsStoreError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsStoreError {
    fn from(err: serde_json::Error) -> Self {
        SettingsStoreError::Serde(err)
    }
}

impl std::fmt::Display for SettingsStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsStoreError::Io(e) => write!(f, "Settings I/O error: {e}"),
            SettingsStoreError::Serde(e) => {
                write!(f, "Settings serialization/deserialization error: {e}")
            }
            SettingsStoreError::NoConfigDirectory => {
                write!(f, "Could not determine configuration directory for settings")
            }
            SettingsStoreError::InvalidScope(scope) => {
                write!(f, "Invalid settings scope: '{scope}'")
            }
        }
    }
}

impl std::error::Error for SettingsStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsStoreError::Io(e) => Some(e),
            SettingsStoreError::Serde(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsStoreError>;

pub trait SettingsStoreOperations: Send + Sync {
    fn load(&self, scope: &str) -> Result<GeneralSettings>;
    fn save(&self, scope: &str, json: &str) -> Result<()>;
}

enum StoreRoot {
    App(String),
    Dir(PathBuf),
}

pub struct CoreSettingsStore {
    root: StoreRoot,
}

impl CoreSettingsStore {
    /// Stores settings in the per-user local configuration directory of `app_name`.
    pub fn new(app_name: &str) -> Self {
        CoreSettingsStore {
            root: StoreRoot::App(app_name.to_string()),
        }
    }

    /// Stores settings below an explicit directory.
    pub fn with_root_dir(root: impl Into<PathBuf>) -> Self {
        CoreSettingsStore {
            root: StoreRoot::Dir(root.into()),
        }
    }

    pub(crate) fn root_dir(&self) -> Result<PathBuf> {
        match &self.root {
            StoreRoot::App(app_name) => path_utils::get_base_app_config_local_dir(app_name)
                .ok_or(SettingsStoreError::NoConfigDirectory),
            StoreRoot::Dir(dir) => Ok(dir.clone()),
        }
    }

    fn settings_file_path(&self, scope: &str) -> Result<PathBuf> {
        if !scope.is_empty()
            && (scope.trim().is_empty() || !scope.chars().all(path_utils::is_valid_scope_char))
        {
            return Err(SettingsStoreError::InvalidScope(scope.to_string()));
        }
        let root = self.root_dir()?;
        Ok(path_utils::scoped_settings_file(
            &root,
            scope,
            SETTINGS_FILE_NAME,
        ))
    }

    fn write_file(file_path: &Path, json: &str) -> Result<()> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(file_path, json)?;
        Ok(())
    }
}

impl Default for CoreSettingsStore {
    fn default() -> Self {
        Self::new(APP_NAME)
    }
}

impl SettingsStoreOperations for CoreSettingsStore {
    /*
     * Loads the settings for `scope`. A missing file is not an error: default
     * settings are written to disk and returned, so later loads see the same
     * values. Content that does not parse is reported as `Serde`.
     */
    fn load(&self, scope: &str) -> Result<GeneralSettings> {
        log::trace!("CoreSettingsStore: Loading settings for scope '{scope}'");
        let file_path = self.settings_file_path(scope)?;

        if !file_path.exists() {
            let defaults = GeneralSettings::default();
            Self::write_file(&file_path, &defaults.to_json_string()?)?;
            log::debug!(
                "CoreSettingsStore: Settings file {file_path:?} did not exist, wrote defaults."
            );
            return Ok(defaults);
        }

        let contents = fs::read_to_string(&file_path)?;
        let settings = GeneralSettings::from_json_str(&contents)?;
        log::debug!("CoreSettingsStore: Loaded settings for scope '{scope}' from {file_path:?}.");
        Ok(settings)
    }

    /*
     * Replaces the stored settings for `scope` with `json`. The previous file
     * content is discarded entirely; nothing is merged.
     */
    fn save(&self, scope: &str, json: &str) -> Result<()> {
        log::trace!("CoreSettingsStore: Saving settings for scope '{scope}'");
        let file_path = self.settings_file_path(scope)?;
        Self::write_file(&file_path, json)?;
        log::debug!("CoreSettingsStore: Saved settings for scope '{scope}' to {file_path:?}.");
        Ok(())
    }
}
