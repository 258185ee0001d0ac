use crate::core::models::Theme;

// The host-level rendering hook that applies a theme to the settings window.
// Implemented by the UI shell; the view-model only requests changes.
pub trait ThemeRendererOperations: Send + Sync {
    fn set_requested_theme(&self, theme: Theme);
}
