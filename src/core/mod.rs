/*
 * This module consolidates the core, platform-agnostic logic of the settings page.
 * It re-exports the settings model (`GeneralSettings`, `Theme`, the outgoing
 * envelope), the store abstraction (`SettingsStoreOperations` with the file-backed
 * `CoreSettingsStore`), the generic observable property container, the host
 * channel used to reach the runtime process, the persist-and-notify cycle, and
 * the external collaborators for theme rendering and URL launching.
 */
pub mod host_channel;
pub mod launcher;
pub mod models;
pub mod observable;
pub mod path_utils;
pub mod settings_store;
pub mod sync;
pub mod theme_renderer;

// Re-export key structures and enums
pub use models::{GeneralSettings, OutgoingGeneralSettings, Theme};

pub use observable::{ChangeNotification, ObservableProperty, PropertyChangeObserver, PropertyId};

// Re-export store related items
pub use settings_store::{CoreSettingsStore, SettingsStoreError, SettingsStoreOperations};

pub use host_channel::{DispatchOutcome, HostChannel, HostRegistration};

pub use sync::{CycleOutcome, SettingsSync};

pub use launcher::{CoreUrlLauncher, UrlLauncherOperations};

pub use theme_renderer::ThemeRendererOperations;
