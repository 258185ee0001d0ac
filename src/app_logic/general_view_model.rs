use crate::app_logic::commands::{self, ButtonClickCommand};
use crate::app_logic::constants::GLOBAL_SCOPE;
use crate::core::{
    CycleOutcome, GeneralSettings, HostChannel, ObservableProperty, PropertyId,
    SettingsStoreError, SettingsStoreOperations, SettingsSync, Theme, ThemeRendererOperations,
    UrlLauncherOperations,
};
use std::sync::Arc;

const THEME: ObservableProperty<GeneralSettings, String> =
    ObservableProperty::new(PropertyId::Theme, |s| s.theme.clone(), |s, v| s.theme = v);
const STARTUP: ObservableProperty<GeneralSettings, bool> =
    ObservableProperty::new(PropertyId::Startup, |s| s.startup, |s, v| s.startup = v);
const IS_ELEVATED: ObservableProperty<GeneralSettings, bool> = ObservableProperty::new(
    PropertyId::IsElevated,
    |s| s.is_elevated,
    |s, v| s.is_elevated = v,
);
const RUN_ELEVATED: ObservableProperty<GeneralSettings, bool> = ObservableProperty::new(
    PropertyId::RunElevated,
    |s| s.run_elevated,
    |s, v| s.run_elevated = v,
);
const PACKAGED: ObservableProperty<GeneralSettings, bool> =
    ObservableProperty::new(PropertyId::Packaged, |s| s.packaged, |s, v| s.packaged = v);

/*
 * The view-model behind the General settings page.
 *
 * It owns the settings snapshot loaded from the store at construction and
 * exposes typed accessors for each field. Every effective change goes through an
 * `ObservableProperty`, whose single observer (`SettingsSync`) persists the
 * snapshot and forwards it to the host before the setter returns. Setters that
 * do not change anything do nothing at all.
 *
 * The theme is held once, as the snapshot's theme string; the three radio-button
 * flags are derived from it. Checking a flag is the same as calling
 * `set_theme`; unchecking one is ignored.
 */
pub struct GeneralViewModel {
    settings: GeneralSettings,
    sync: SettingsSync,
    theme_renderer: Arc<dyn ThemeRendererOperations>,
    check_for_updates: ButtonClickCommand,
    restart_elevated: ButtonClickCommand,
}

impl GeneralViewModel {
    /*
     * Loads the global settings from `store` and applies the persisted theme
     * through `theme_renderer`. A store that cannot be read fails construction.
     * An unrecognized theme string is tolerated: it is logged, kept as-is in the
     * snapshot, no flag is checked and the renderer is left alone.
     */
    pub fn new(
        store: Arc<dyn SettingsStoreOperations>,
        host: Arc<HostChannel>,
        theme_renderer: Arc<dyn ThemeRendererOperations>,
        launcher: Arc<dyn UrlLauncherOperations>,
    ) -> Result<Self, SettingsStoreError> {
        let settings = store.load(GLOBAL_SCOPE)?;
        log::debug!("GeneralViewModel: Loaded settings: {settings:?}");

        match Theme::parse(&settings.theme) {
            Some(theme) => theme_renderer.set_requested_theme(theme),
            None => log::warn!(
                "GeneralViewModel: Unrecognized theme '{}' in settings; leaving current theme in place.",
                settings.theme
            ),
        }

        Ok(GeneralViewModel {
            settings,
            check_for_updates: commands::check_for_updates_command(launcher),
            restart_elevated: commands::restart_elevated_command(
                Arc::clone(&store),
                Arc::clone(&host),
                GLOBAL_SCOPE,
            ),
            sync: SettingsSync::new(GLOBAL_SCOPE, store, host),
            theme_renderer,
        })
    }

    /// Read-only view of the current in-memory snapshot.
    pub fn settings(&self) -> &GeneralSettings {
        &self.settings
    }

    pub fn theme(&self) -> Option<Theme> {
        Theme::parse(&self.settings.theme)
    }

    /*
     * Selects `choice` as the theme. The stored string is compared with the
     * canonical string of `choice`, so a persisted "DARK" is rewritten to "dark".
     * On a change the renderer is asked to apply the new theme first, then the
     * snapshot is updated and one persist-and-notify cycle runs. Returns whether
     * the theme changed.
     */
    pub fn set_theme(&mut self, choice: Theme) -> bool {
        let canonical = choice.as_str();
        if THEME.get(&self.settings) == canonical {
            return false;
        }
        self.theme_renderer.set_requested_theme(choice);
        THEME.set(&mut self.settings, canonical.to_string(), &mut self.sync)
    }

    pub fn is_light_theme_checked(&self) -> bool {
        self.theme() == Some(Theme::Light)
    }

    pub fn is_dark_theme_checked(&self) -> bool {
        self.theme() == Some(Theme::Dark)
    }

    pub fn is_system_theme_checked(&self) -> bool {
        self.theme() == Some(Theme::System)
    }

    pub fn set_is_light_theme_checked(&mut self, checked: bool) -> bool {
        self.check_theme(Theme::Light, checked)
    }

    pub fn set_is_dark_theme_checked(&mut self, checked: bool) -> bool {
        self.check_theme(Theme::Dark, checked)
    }

    pub fn set_is_system_theme_checked(&mut self, checked: bool) -> bool {
        self.check_theme(Theme::System, checked)
    }

    fn check_theme(&mut self, theme: Theme, checked: bool) -> bool {
        if !checked {
            log::trace!("GeneralViewModel: Ignoring uncheck of '{theme}' theme flag.");
            return false;
        }
        self.set_theme(theme)
    }

    pub fn startup(&self) -> bool {
        STARTUP.get(&self.settings)
    }

    pub fn set_startup(&mut self, value: bool) -> bool {
        STARTUP.set(&mut self.settings, value, &mut self.sync)
    }

    pub fn is_elevated(&self) -> bool {
        IS_ELEVATED.get(&self.settings)
    }

    pub fn set_is_elevated(&mut self, value: bool) -> bool {
        IS_ELEVATED.set(&mut self.settings, value, &mut self.sync)
    }

    pub fn run_elevated(&self) -> bool {
        RUN_ELEVATED.get(&self.settings)
    }

    pub fn set_run_elevated(&mut self, value: bool) -> bool {
        RUN_ELEVATED.set(&mut self.settings, value, &mut self.sync)
    }

    pub fn packaged(&self) -> bool {
        PACKAGED.get(&self.settings)
    }

    pub fn set_packaged(&mut self, value: bool) -> bool {
        PACKAGED.set(&mut self.settings, value, &mut self.sync)
    }

    pub fn check_for_updates_command(&self) -> &ButtonClickCommand {
        &self.check_for_updates
    }

    pub fn restart_elevated_command(&self) -> &ButtonClickCommand {
        &self.restart_elevated
    }

    /// Outcome of the most recent persist-and-notify cycle, if any has run.
    pub fn last_cycle(&self) -> Option<&CycleOutcome> {
        self.sync.last_cycle()
    }

    pub fn cycles_run(&self) -> u64 {
        self.sync.cycles_run()
    }
}
