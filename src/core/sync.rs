/*
 * The persist-and-notify cycle run for every property change.
 *
 * `SettingsSync` is the single observer of the view-model's observable
 * properties. For each `ChangeNotification` it first writes the whole snapshot
 * to the settings store, replacing what was there, and then forwards an
 * `OutgoingGeneralSettings` envelope built from the same snapshot to the host.
 * A failed write is logged and recorded but never stops the dispatch.
 */
use crate::core::host_channel::{DispatchOutcome, HostChannel};
use crate::core::models::{GeneralSettings, OutgoingGeneralSettings};
use crate::core::observable::{ChangeNotification, PropertyChangeObserver, PropertyId};
use crate::core::settings_store::{SettingsStoreError, SettingsStoreOperations};
use std::sync::Arc;

// What happened during one persist-and-notify cycle.
#[derive(Debug)]
pub struct CycleOutcome {
    pub property: PropertyId,
    pub persisted: Result<(), SettingsStoreError>,
    pub dispatched: DispatchOutcome,
}

impl CycleOutcome {
    pub fn is_success(&self) -> bool {
        self.persisted.is_ok()
    }
}

pub struct SettingsSync {
    scope: String,
    store: Arc<dyn SettingsStoreOperations>,
    host: Arc<HostChannel>,
    cycles_run: u64,
    last_cycle: Option<CycleOutcome>,
}

impl SettingsSync {
    pub fn new(
        scope: &str,
        store: Arc<dyn SettingsStoreOperations>,
        host: Arc<HostChannel>,
    ) -> Self {
        SettingsSync {
            scope: scope.to_string(),
            store,
            host,
            cycles_run: 0,
            last_cycle: None,
        }
    }

    pub fn cycles_run(&self) -> u64 {
        self.cycles_run
    }

    pub fn last_cycle(&self) -> Option<&CycleOutcome> {
        self.last_cycle.as_ref()
    }

    fn persist(&self, settings: &GeneralSettings) -> Result<(), SettingsStoreError> {
        let json = settings.to_json_string()?;
        self.store.save(&self.scope, &json)
    }

    /*
     * Runs one full cycle for `property` against `settings`. Public so callers
     * that already hold a snapshot can force a resync; the view-model goes
     * through `PropertyChangeObserver::on_change` instead.
     */
    pub fn persist_and_notify(
        &mut self,
        property: PropertyId,
        settings: &GeneralSettings,
    ) -> &CycleOutcome {
        log::trace!("SettingsSync: Change to '{property}', persisting and notifying host.");

        let persisted = self.persist(settings);
        if let Err(e) = &persisted {
            log::error!(
                "SettingsSync: Failed to persist settings after change to '{property}': {e}. Host will still be notified."
            );
        }

        let dispatched = send_envelope(&self.host, OutgoingGeneralSettings::new(settings.clone()));

        self.cycles_run += 1;
        self.last_cycle.insert(CycleOutcome {
            property,
            persisted,
            dispatched,
        })
    }
}

impl PropertyChangeObserver<GeneralSettings> for SettingsSync {
    fn on_change(&mut self, notification: ChangeNotification, model: &GeneralSettings) {
        self.persist_and_notify(notification.property, model);
    }
}

/*
 * Serializes `envelope` and hands it to the host channel. Shared by the
 * persist-and-notify cycle and by commands that bypass the store.
 */
pub fn send_envelope(host: &HostChannel, envelope: OutgoingGeneralSettings) -> DispatchOutcome {
    match envelope.to_json_string() {
        Ok(payload) => host.dispatch(&payload),
        Err(e) => {
            log::error!("SettingsSync: Failed to serialize outgoing settings: {e}");
            DispatchOutcome::Skipped
        }
    }
}
