/*
 * The button actions of the General page. Each is wrapped in a
 * `ButtonClickCommand` so the UI can bind and invoke it without knowing what it
 * does. Neither command goes through the view-model's observable properties:
 * "Check for updates" only launches a URL, and "Restart elevated" sends a
 * one-off elevation request to the host from a freshly loaded snapshot without
 * persisting it.
 */
use crate::app_logic::constants::RELEASES_URL;
use crate::core::sync::send_envelope;
use crate::core::{
    DispatchOutcome, HostChannel, OutgoingGeneralSettings, SettingsStoreError,
    SettingsStoreOperations, UrlLauncherOperations,
};
use std::fmt;
use std::sync::Arc;

pub struct ButtonClickCommand {
    name: &'static str,
    action: Box<dyn Fn() + Send + Sync>,
}

impl ButtonClickCommand {
    pub fn new<F>(name: &'static str, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        ButtonClickCommand {
            name,
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn execute(&self) {
        log::debug!("ButtonClickCommand: Executing '{}'.", self.name);
        (self.action)();
    }
}

impl fmt::Debug for ButtonClickCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonClickCommand")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub fn check_for_updates(launcher: &dyn UrlLauncherOperations) {
    launcher.open_url(RELEASES_URL);
}

/*
 * Reloads the persisted settings for `scope`, flags them for an elevated run and
 * dispatches them to the host. The store is not written and no in-memory
 * view-model state is touched. If the reload fails nothing is sent.
 */
pub fn restart_elevated(
    store: &dyn SettingsStoreOperations,
    host: &HostChannel,
    scope: &str,
) -> Result<DispatchOutcome, SettingsStoreError> {
    let mut settings = store.load(scope)?;
    settings.run_elevated = true;
    let outcome = send_envelope(host, OutgoingGeneralSettings::new(settings));
    log::debug!("Commands: Elevated restart request {outcome:?}.");
    Ok(outcome)
}

pub fn check_for_updates_command(launcher: Arc<dyn UrlLauncherOperations>) -> ButtonClickCommand {
    ButtonClickCommand::new("CheckForUpdates", move || {
        check_for_updates(launcher.as_ref())
    })
}

pub fn restart_elevated_command(
    store: Arc<dyn SettingsStoreOperations>,
    host: Arc<HostChannel>,
    scope: &str,
) -> ButtonClickCommand {
    let scope = scope.to_string();
    ButtonClickCommand::new("RestartElevated", move || {
        if let Err(e) = restart_elevated(store.as_ref(), &host, &scope) {
            log::error!("Commands: Could not reload settings for elevated restart: {e}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeneralSettings;
    use std::io;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockLauncher {
        opened: Mutex<Vec<String>>,
    }

    impl UrlLauncherOperations for MockLauncher {
        fn open_url(&self, uri: &str) {
            self.opened.lock().unwrap().push(uri.to_string());
        }
    }

    struct MockStore {
        stored: Mutex<Result<GeneralSettings, ()>>,
        save_calls: Mutex<u32>,
    }

    impl MockStore {
        fn with(settings: GeneralSettings) -> Self {
            MockStore {
                stored: Mutex::new(Ok(settings)),
                save_calls: Mutex::new(0),
            }
        }
        fn unreadable() -> Self {
            MockStore {
                stored: Mutex::new(Err(())),
                save_calls: Mutex::new(0),
            }
        }
    }

    impl SettingsStoreOperations for MockStore {
        fn load(&self, _scope: &str) -> Result<GeneralSettings, SettingsStoreError> {
            self.stored.lock().unwrap().clone().map_err(|_| {
                SettingsStoreError::Io(io::Error::new(io::ErrorKind::NotFound, "mocked"))
            })
        }
        fn save(&self, _scope: &str, _json: &str) -> Result<(), SettingsStoreError> {
            *self.save_calls.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn recording_host() -> (Arc<HostChannel>, Arc<Mutex<Vec<String>>>) {
        let host = Arc::new(HostChannel::new());
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        host.register(move |payload: &str| sink.lock().unwrap().push(payload.to_string()));
        (host, received)
    }

    #[test]
    fn test_check_for_updates_opens_release_listing() {
        let launcher = Arc::new(MockLauncher::default());
        let command = check_for_updates_command(launcher.clone());

        command.execute();

        assert_eq!(command.name(), "CheckForUpdates");
        assert_eq!(*launcher.opened.lock().unwrap(), vec![RELEASES_URL.to_string()]);
    }

    #[test]
    fn test_restart_elevated_sends_reloaded_snapshot_with_flag() {
        // Arrange
        let mut persisted = GeneralSettings::default();
        persisted.startup = true;
        persisted.theme = "light".to_string();
        let store = Arc::new(MockStore::with(persisted.clone()));
        let (host, received) = recording_host();
        let command = restart_elevated_command(store.clone(), host, "");

        // Act
        command.execute();

        // Assert
        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let envelope: OutgoingGeneralSettings = serde_json::from_str(&received[0]).unwrap();
        let mut expected = persisted;
        expected.run_elevated = true;
        assert_eq!(envelope.general, expected);
        assert_eq!(*store.save_calls.lock().unwrap(), 0, "Restart must not persist");
    }

    #[test]
    fn test_restart_elevated_without_host_is_skipped() {
        let store = MockStore::with(GeneralSettings::default());
        let host = HostChannel::new();

        let outcome = restart_elevated(&store, &host, "").unwrap();

        assert_eq!(outcome, DispatchOutcome::Skipped);
    }

    #[test]
    fn test_restart_elevated_reload_failure_sends_nothing() {
        let store = MockStore::unreadable();
        let (host, received) = recording_host();

        assert!(restart_elevated(&store, &host, "").is_err());
        assert!(received.lock().unwrap().is_empty());

        // The command form swallows the error after logging it.
        restart_elevated_command(Arc::new(store), host, "").execute();
        assert!(received.lock().unwrap().is_empty());
    }
}
