/*
 * This module provides utility functions for locating the per-user directory
 * that holds the settings files, and for mapping a settings scope to a file
 * within it.
 */
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/*
 * Retrieves the application's local (non-roaming) configuration directory,
 * creating it if necessary. The path is derived without an organization
 * qualifier, placing it directly under the user's local application data
 * directory (e.g. AppData/Local on Windows, ~/.config on Linux).
 *
 * Returns `None` if the directory could not be determined or created.
 */
pub fn get_base_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Attempting to get base app config local dir for '{app_name}'");
    ProjectDirs::from("", "", app_name).and_then(|proj_dirs| {
        let config_path = proj_dirs.config_local_dir();
        if !config_path.exists() {
            if let Err(e) = fs::create_dir_all(config_path) {
                log::error!(
                    "PathUtils: Failed to create base app config directory {config_path:?}: {e}"
                );
                return None;
            }
            log::debug!("PathUtils: Created base app config directory: {config_path:?}");
        }
        Some(config_path.to_path_buf())
    })
}

pub fn is_valid_scope_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == ' '
}

/*
 * The empty scope is the global settings file at the root; any other scope is a
 * subdirectory named after it. Scope validation is the caller's job.
 */
pub fn scoped_settings_file(root: &Path, scope: &str, file_name: &str) -> PathBuf {
    if scope.is_empty() {
        root.join(file_name)
    } else {
        root.join(scope).join(file_name)
    }
}
