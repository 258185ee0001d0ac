/*
 * Opens external URLs (the release listing for the update check) without
 * blocking the caller. The launch runs on a detached thread; its result is only
 * logged and never joined back into the settings path.
 */
use std::io;
use std::thread;

pub trait UrlLauncherOperations: Send + Sync {
    fn open_url(&self, uri: &str);
}

type OpenFn = fn(&str) -> io::Result<()>;

fn open_with_system_handler(uri: &str) -> io::Result<()> {
    open::that(uri)
}

pub struct CoreUrlLauncher {
    opener: OpenFn,
}

impl CoreUrlLauncher {
    pub fn new() -> Self {
        CoreUrlLauncher {
            opener: open_with_system_handler,
        }
    }

    /// Uses `opener` instead of the system URL handler.
    pub fn with_opener(opener: OpenFn) -> Self {
        CoreUrlLauncher { opener }
    }
}

impl Default for CoreUrlLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlLauncherOperations for CoreUrlLauncher {
    fn open_url(&self, uri: &str) {
        log::trace!("CoreUrlLauncher: Launching '{uri}'");
        let opener = self.opener;
        let owned_uri = uri.to_string();
        let spawned = thread::Builder::new()
            .name("url-launcher".to_string())
            .spawn(move || match opener(&owned_uri) {
                Ok(()) => log::debug!("CoreUrlLauncher: Opened '{owned_uri}'."),
                Err(e) => log::error!("CoreUrlLauncher: Failed to open '{owned_uri}': {e}"),
            });
        if let Err(e) = spawned {
            log::error!("CoreUrlLauncher: Could not start launcher thread for '{uri}': {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::mpsc::{self, Sender};
    use std::time::Duration;

    static OPENED: Mutex<Option<Sender<String>>> = Mutex::new(None);

    fn recording_opener(uri: &str) -> io::Result<()> {
        if let Some(tx) = OPENED.lock().unwrap().as_ref() {
            let _ = tx.send(uri.to_string());
        }
        Ok(())
    }

    static FAILED: Mutex<Option<Sender<String>>> = Mutex::new(None);

    fn failing_opener(uri: &str) -> io::Result<()> {
        if let Some(tx) = FAILED.lock().unwrap().as_ref() {
            let _ = tx.send(uri.to_string());
        }
        Err(io::Error::new(io::ErrorKind::NotFound, "no handler"))
    }

    #[test]
    fn test_open_url_runs_opener_on_background_thread() {
        let (tx, rx) = mpsc::channel();
        *OPENED.lock().unwrap() = Some(tx);
        let launcher = CoreUrlLauncher::with_opener(recording_opener);

        launcher.open_url("https://example.com/releases");

        let opened = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("opener should have been called");
        assert_eq!(opened, "https://example.com/releases");
        *OPENED.lock().unwrap() = None;
    }

    #[test]
    fn test_open_url_failure_does_not_reach_caller() {
        let (tx, rx) = mpsc::channel();
        *FAILED.lock().unwrap() = Some(tx);
        let launcher = CoreUrlLauncher::with_opener(failing_opener);

        // Returns immediately; the failure is only logged on the launcher thread.
        launcher.open_url("https://example.com");

        let attempted = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("failing opener should still have been called");
        assert_eq!(attempted, "https://example.com");
        *FAILED.lock().unwrap() = None;
    }
}
