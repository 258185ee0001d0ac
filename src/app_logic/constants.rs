/*
 * Defines shared constants for the General settings page: where its settings
 * live and which external resources its commands point at.
 */

// Application name used to derive the per-user configuration directory.
pub const APP_NAME: &str = "PowerToys";

// Scope of the General page's settings. Empty means the global settings file.
pub const GLOBAL_SCOPE: &str = "";

// File name of a settings document inside its scope directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// Release listing opened by the "Check for updates" button.
pub const RELEASES_URL: &str = "https://github.com/microsoft/PowerToys/releases";
