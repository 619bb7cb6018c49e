use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use stockterm_store::SnapshotSource;
use stockterm_types::Snapshot;

use crate::{Error, Result};

/// What a finished fetch reports: the new snapshot or a verbatim reason.
pub type FetchOutcome = std::result::Result<Snapshot, String>;

/// Observable fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Runs snapshot fetches on a worker thread, one at a time.
///
/// The UI loop calls [`SnapshotFetcher::poll`] between input events; the
/// worker never touches UI state.
pub struct SnapshotFetcher {
    source: Arc<dyn SnapshotSource>,
    in_flight: Option<Receiver<FetchOutcome>>,
}

impl SnapshotFetcher {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            source,
            in_flight: None,
        }
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a fetch. Refused while another one is outstanding.
    pub fn request(&mut self) -> Result<()> {
        if self.in_flight.is_some() {
            tracing::debug!("fetch refused: already in flight");
            return Err(Error::FetchInFlight);
        }

        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        tracing::info!(source = %source.describe(), "fetching snapshot");

        thread::Builder::new()
            .name("snapshot-fetch".to_string())
            .spawn(move || {
                let outcome = source.fetch_latest_snapshot().map_err(|e| e.to_string());
                // Receiver gone means the session ended; nothing to report to.
                let _ = tx.send(outcome);
            })?;

        self.in_flight = Some(rx);
        Ok(())
    }

    /// Non-blocking check for a finished fetch.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let rx = self.in_flight.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err("snapshot fetch worker exited".to_string()),
        };
        self.in_flight = None;
        log_outcome(&outcome);
        Some(outcome)
    }

    /// Block until the outstanding fetch finishes.
    pub fn wait(&mut self) -> Option<FetchOutcome> {
        let rx = self.in_flight.take()?;
        let outcome = rx
            .recv()
            .unwrap_or_else(|_| Err("snapshot fetch worker exited".to_string()));
        log_outcome(&outcome);
        Some(outcome)
    }

    /// Request and wait: the one-shot path used by console commands.
    pub fn fetch_blocking(&mut self) -> Result<Snapshot> {
        self.request()?;
        match self.wait() {
            Some(outcome) => outcome.map_err(Error::Fetch),
            None => Err(Error::Fetch("no fetch outstanding".to_string())),
        }
    }
}

fn log_outcome(outcome: &FetchOutcome) {
    match outcome {
        Ok(snapshot) => tracing::info!(
            date = snapshot.date.as_deref().unwrap_or("-"),
            records = snapshot.len(),
            "snapshot fetched"
        ),
        Err(reason) => tracing::warn!(%reason, "snapshot fetch failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Condvar, Mutex};
    use stockterm_store::MemorySource;
    use stockterm_types::StockRecord;

    /// Blocks every fetch until released.
    struct GatedSource {
        gate: Arc<(Mutex<bool>, Condvar)>,
    }

    impl SnapshotSource for GatedSource {
        fn describe(&self) -> String {
            "gated".to_string()
        }

        fn fetch_latest_snapshot(&self) -> stockterm_store::Result<Snapshot> {
            let (lock, cvar) = &*self.gate;
            let mut open = lock.lock().unwrap();
            while !*open {
                open = cvar.wait(open).unwrap();
            }
            Ok(Snapshot::new(None, vec![StockRecord::new("AAA")]))
        }
    }

    #[test]
    fn test_second_request_is_refused_while_in_flight() {
        let gate = Arc::new((Mutex::new(false), Condvar::new()));
        let mut fetcher = SnapshotFetcher::new(Arc::new(GatedSource { gate: gate.clone() }));

        fetcher.request().unwrap();
        assert!(fetcher.is_in_flight());
        assert!(matches!(fetcher.request(), Err(Error::FetchInFlight)));
        assert!(fetcher.poll().is_none());

        {
            let (lock, cvar) = &*gate;
            *lock.lock().unwrap() = true;
            cvar.notify_all();
        }

        let outcome = fetcher.wait().unwrap();
        assert_eq!(outcome.unwrap().len(), 1);
        assert!(!fetcher.is_in_flight());
        assert!(fetcher.request().is_ok());
    }

    #[test]
    fn test_failure_reason_is_verbatim() {
        let mut fetcher = SnapshotFetcher::new(Arc::new(MemorySource::failing("store offline")));
        let err = fetcher.fetch_blocking().unwrap_err();
        assert_eq!(err.to_string(), "store offline");
    }

    #[test]
    fn test_poll_without_request() {
        let mut fetcher = SnapshotFetcher::new(Arc::new(MemorySource::new(Snapshot::empty())));
        assert!(fetcher.poll().is_none());
        assert!(fetcher.wait().is_none());
    }
}
