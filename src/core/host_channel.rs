/*
 * The channel to the host process that applies settings at runtime.
 *
 * The host shell registers a sender callback once it has attached; until then,
 * and after it detaches, dispatching is a silent no-op. The current sender lives
 * in an `ArcSwapOption` so dispatch only takes a lock-free snapshot of it and
 * calls the host without holding anything. Attach and detach are serialized by a
 * single mutex that also tracks the registration generation, so a stale detach
 * from an older registration cannot remove a newer one.
 */
use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use std::sync::Arc;

type SendFn = dyn Fn(&str) + Send + Sync;

struct HostSender {
    generation: u64,
    send: Box<SendFn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    Skipped,
}

// Token returned by `HostChannel::register`, used to detach that registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRegistration(u64);

pub struct HostChannel {
    sender: ArcSwapOption<HostSender>,
    registration_lock: Mutex<u64>,
}

impl HostChannel {
    pub fn new() -> Self {
        HostChannel {
            sender: ArcSwapOption::empty(),
            registration_lock: Mutex::new(0),
        }
    }

    /*
     * Installs `send` as the host callback, replacing any previous one.
     * The returned token identifies this registration for `unregister`.
     */
    pub fn register<F>(&self, send: F) -> HostRegistration
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut generation = self.registration_lock.lock();
        *generation += 1;
        let sender = HostSender {
            generation: *generation,
            send: Box::new(send),
        };
        let previous = self.sender.swap(Some(Arc::new(sender)));
        log::debug!(
            "HostChannel: Registered host sender (generation {}, replaced existing: {}).",
            *generation,
            previous.is_some()
        );
        HostRegistration(*generation)
    }

    /*
     * Detaches the sender installed by `registration`. Returns `false` if that
     * registration is no longer the active one (already detached or replaced).
     */
    pub fn unregister(&self, registration: HostRegistration) -> bool {
        let _guard = self.registration_lock.lock();
        let is_current = self
            .sender
            .load_full()
            .is_some_and(|s| s.generation == registration.0);
        if !is_current {
            log::debug!(
                "HostChannel: Ignoring unregister for stale registration {}.",
                registration.0
            );
            return false;
        }
        self.sender.store(None);
        log::debug!("HostChannel: Unregistered host sender {}.", registration.0);
        true
    }

    pub fn is_registered(&self) -> bool {
        self.sender.load().is_some()
    }

    /*
     * Sends `payload` to the registered host callback, if any. The callback is
     * invoked outside of any lock; it may register or unregister re-entrantly.
     */
    pub fn dispatch(&self, payload: &str) -> DispatchOutcome {
        match self.sender.load_full() {
            Some(sender) => {
                (sender.send)(payload);
                log::trace!("HostChannel: Delivered {} bytes to host.", payload.len());
                DispatchOutcome::Delivered
            }
            None => {
                log::debug!("HostChannel: No host sender registered, dispatch skipped.");
                DispatchOutcome::Skipped
            }
        }
    }
}

impl Default for HostChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;
    use std::thread;

    fn recording_sender() -> (Arc<StdMutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
        let received = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        (received, move |payload: &str| {
            sink.lock().unwrap().push(payload.to_string())
        })
    }

    #[test]
    fn test_dispatch_without_sender_is_skipped() {
        let channel = HostChannel::new();
        assert!(!channel.is_registered());
        assert_eq!(channel.dispatch("{}"), DispatchOutcome::Skipped);
    }

    #[test]
    fn test_dispatch_reaches_registered_sender() {
        let channel = HostChannel::new();
        let (received, sender) = recording_sender();
        channel.register(sender);

        assert_eq!(channel.dispatch("one"), DispatchOutcome::Delivered);
        assert_eq!(channel.dispatch("two"), DispatchOutcome::Delivered);

        assert_eq!(*received.lock().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_unregister_detaches_sender() {
        let channel = HostChannel::new();
        let (received, sender) = recording_sender();
        let registration = channel.register(sender);

        assert!(channel.unregister(registration));
        assert!(!channel.is_registered());
        assert_eq!(channel.dispatch("late"), DispatchOutcome::Skipped);
        assert!(received.lock().unwrap().is_empty());
        assert!(!channel.unregister(registration), "Second unregister is a no-op");
    }

    #[test]
    fn test_stale_unregister_keeps_newer_registration() {
        let channel = HostChannel::new();
        let (_, first) = recording_sender();
        let (received, second) = recording_sender();

        let old = channel.register(first);
        let _new = channel.register(second);

        assert!(!channel.unregister(old));
        assert_eq!(channel.dispatch("kept"), DispatchOutcome::Delivered);
        assert_eq!(*received.lock().unwrap(), vec!["kept"]);
    }

    #[test]
    fn test_sender_may_unregister_itself_during_dispatch() {
        let channel = Arc::new(HostChannel::new());
        let registration = Arc::new(StdMutex::new(None));

        let channel_for_sender = Arc::clone(&channel);
        let registration_for_sender = Arc::clone(&registration);
        let token = channel.register(move |_payload: &str| {
            if let Some(token) = registration_for_sender.lock().unwrap().take() {
                channel_for_sender.unregister(token);
            }
        });
        *registration.lock().unwrap() = Some(token);

        assert_eq!(channel.dispatch("bye"), DispatchOutcome::Delivered);
        assert!(!channel.is_registered());
    }

    #[test]
    fn test_attach_from_another_thread_is_visible_to_dispatch() {
        let channel = Arc::new(HostChannel::new());
        let (received, sender) = recording_sender();

        let attacher = {
            let channel = Arc::clone(&channel);
            thread::spawn(move || channel.register(sender))
        };
        attacher.join().unwrap();

        assert_eq!(channel.dispatch("hello"), DispatchOutcome::Delivered);
        assert_eq!(*received.lock().unwrap(), vec!["hello"]);
    }
}
