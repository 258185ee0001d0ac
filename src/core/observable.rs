/*
 * A generic change-tracking property container.
 *
 * An `ObservableProperty<M, T>` names one field of a model `M` through an
 * explicit `PropertyId` and a read/write accessor pair. Setting it compares the
 * new value with the current one and, only when they differ, writes the field
 * and synchronously hands a `ChangeNotification` to the observer before
 * returning. The observer receives the already-updated model so it can act on
 * the full state (persist it, forward it) without a second borrow.
 */
use std::fmt;

// Identifies an observable field on the General page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Theme,
    Startup,
    IsElevated,
    RunElevated,
    Packaged,
}

impl PropertyId {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyId::Theme => "theme",
            PropertyId::Startup => "startup",
            PropertyId::IsElevated => "is_elevated",
            PropertyId::RunElevated => "run_elevated",
            PropertyId::Packaged => "packaged",
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Raised once per effective property change. Consumed immediately, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeNotification {
    pub property: PropertyId,
}

pub trait PropertyChangeObserver<M> {
    fn on_change(&mut self, notification: ChangeNotification, model: &M);
}

pub struct ObservableProperty<M, T> {
    id: PropertyId,
    read: fn(&M) -> T,
    write: fn(&mut M, T),
}

impl<M, T: PartialEq> ObservableProperty<M, T> {
    pub const fn new(id: PropertyId, read: fn(&M) -> T, write: fn(&mut M, T)) -> Self {
        ObservableProperty { id, read, write }
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn get(&self, model: &M) -> T {
        (self.read)(model)
    }

    /*
     * Writes `value` into `model` if it differs from the current value and then
     * notifies `observer`. Returns whether a change happened. Equal values are a
     * no-op: nothing is written and no notification fires.
     */
    pub fn set(
        &self,
        model: &mut M,
        value: T,
        observer: &mut dyn PropertyChangeObserver<M>,
    ) -> bool {
        if (self.read)(model) == value {
            log::trace!("ObservableProperty: '{}' unchanged, no notification.", self.id);
            return false;
        }
        (self.write)(model, value);
        log::trace!("ObservableProperty: '{}' changed, notifying observer.", self.id);
        observer.on_change(ChangeNotification { property: self.id }, model);
        true
    }
}
