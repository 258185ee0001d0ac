/*
 * Settings-synchronization core for the "General" settings page.
 *
 * `core` holds the platform-agnostic building blocks: the settings model, the
 * durable store, the observable property container, the host channel and the
 * persist-and-notify cycle. `app_logic` builds the view-model and its commands
 * on top of them. `logging` configures `simplelog` for host shells embedding
 * this crate.
 */
pub mod app_logic;
pub mod core;
pub mod logging;

pub use crate::app_logic::{ButtonClickCommand, GeneralViewModel};
pub use crate::core::{
    CoreSettingsStore, CoreUrlLauncher, DispatchOutcome, GeneralSettings, HostChannel,
    HostRegistration, OutgoingGeneralSettings, SettingsStoreError, SettingsStoreOperations,
    Theme, ThemeRendererOperations, UrlLauncherOperations,
};
