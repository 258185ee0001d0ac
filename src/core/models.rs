use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// The three theme choices offered on the General page.
// Persisted as lower-case strings; parsing is case-insensitive because older
// settings files were written with mixed casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// The canonical string stored in the settings file.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /*
     * Maps a persisted theme string to a `Theme`. Returns `None` for anything
     * that is not one of the three known identifiers; callers decide how to
     * surface that (the view-model logs it and leaves every flag unset).
     */
    pub fn parse(raw: &str) -> Option<Theme> {
        let lowered = raw.trim().to_lowercase();
        Theme::ALL.into_iter().find(|t| t.as_str() == lowered)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_theme_string() -> String {
    Theme::System.as_str().to_string()
}

/*
 * The general settings snapshot as persisted by the settings store.
 * Field names are part of the on-disk format shared with the host process and
 * must stay stable. `version` and `enabled` are not edited by this page but are
 * carried through unchanged so a save never drops them.
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub packaged: bool,
    pub startup: bool,
    pub is_elevated: bool,
    pub run_elevated: bool,
    pub theme: String,
    pub version: String,
    pub enabled: BTreeMap<String, bool>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        GeneralSettings {
            packaged: false,
            startup: false,
            is_elevated: false,
            run_elevated: false,
            theme: default_theme_string(),
            version: String::new(),
            enabled: BTreeMap::new(),
        }
    }
}

impl GeneralSettings {
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

// The message sent to the host process. It owns a copy of the snapshot; nothing
// shared crosses the process boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingGeneralSettings {
    pub general: GeneralSettings,
}

impl OutgoingGeneralSettings {
    pub fn new(general: GeneralSettings) -> Self {
        OutgoingGeneralSettings { general }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
