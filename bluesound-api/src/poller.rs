//! Background status poller
//!
//! The poller is a single tokio task that keeps the controller's
//! [`StatusStore`] fresh. It alternates between the `Status` and `SyncStatus`
//! endpoints, always starting with `Status`, and sleeps for the configured
//! interval after each full cycle:
//!
//! ```text
//! Status -> SyncStatus -> (interval) -> Status -> SyncStatus -> (interval) -> ...
//! ```
//!
//! Failures are logged and counted but never stop the loop. Only the
//! cancellation token does. Cancellation is cooperative: the token is checked
//! before each request and raced against the wait between cycles, but a
//! request already in flight is allowed to finish (bounded by the request
//! timeout) and its result is stored.

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::store::StatusStore;
use bluesound_parser::{decode, PlayerStatus, SyncStatus};
use http_client::Transport;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Lifecycle of the poller task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollerState {
    /// Created but never started
    Idle,
    /// Polling
    Running,
    /// Stop requested, waiting for the task to exit
    Stopping,
    /// Task has exited
    Stopped,
}

/// Endpoint polled in one iteration of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTarget {
    Status,
    SyncStatus,
}

impl PollTarget {
    pub fn endpoint(self) -> Endpoint {
        match self {
            PollTarget::Status => Endpoint::Status,
            PollTarget::SyncStatus => Endpoint::SyncStatus,
        }
    }

    /// The target polled after this one
    pub fn next(self) -> Self {
        match self {
            PollTarget::Status => PollTarget::SyncStatus,
            PollTarget::SyncStatus => PollTarget::Status,
        }
    }

    /// True for the last target of a cycle
    fn completes_cycle(self) -> bool {
        self == PollTarget::SyncStatus
    }
}

/// Counters describing what the poller has done so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollerStats {
    /// Requests attempted
    pub polls: u64,
    /// Requests that failed to fetch or decode
    pub failures: u64,
    /// Full `Status` + `SyncStatus` cycles completed
    pub cycles: u64,
}

#[derive(Debug, Default)]
pub(crate) struct PollerCounters {
    polls: AtomicU64,
    failures: AtomicU64,
    cycles: AtomicU64,
}

impl PollerCounters {
    pub(crate) fn stats(&self) -> PollerStats {
        PollerStats {
            polls: self.polls.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            cycles: self.cycles.load(Ordering::Relaxed),
        }
    }
}

/// Everything the polling task needs, moved into the task on spawn
pub(crate) struct Poller {
    transport: Arc<dyn Transport>,
    store: Arc<StatusStore>,
    interval: Duration,
    state: Arc<watch::Sender<PollerState>>,
    counters: Arc<PollerCounters>,
}

impl Poller {
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        store: Arc<StatusStore>,
        interval: Duration,
        state: Arc<watch::Sender<PollerState>>,
        counters: Arc<PollerCounters>,
    ) -> Self {
        Self {
            transport,
            store,
            interval,
            state,
            counters,
        }
    }

    /// Move to `Running` and spawn the polling loop
    ///
    /// The returned receiver resolves once the first full cycle has been
    /// attempted. It errors if the task exits before that.
    pub(crate) fn spawn(self, cancel: CancellationToken) -> (JoinHandle<()>, oneshot::Receiver<()>) {
        let (ready_tx, ready_rx) = oneshot::channel();
        self.state.send_replace(PollerState::Running);
        let handle = tokio::spawn(self.run(cancel, ready_tx));
        (handle, ready_rx)
    }

    async fn run(self, cancel: CancellationToken, ready: oneshot::Sender<()>) {
        info!(
            "Starting status poller for {} (interval: {:?})",
            self.transport.base_url(),
            self.interval
        );

        let mut ready = Some(ready);
        let mut target = PollTarget::Status;

        loop {
            if cancel.is_cancelled() {
                debug!("Poller stopping before {}", target.endpoint());
                break;
            }

            self.poll(target).await;

            if target.completes_cycle() {
                self.counters.cycles.fetch_add(1, Ordering::Relaxed);
                if let Some(ready) = ready.take() {
                    // start() may have been dropped; nobody left to notify
                    let _ = ready.send(());
                }

                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(self.interval) => {}
                }
            }

            target = target.next();
        }

        self.state.send_replace(PollerState::Stopped);
        info!("Status poller for {} stopped", self.transport.base_url());
    }

    async fn poll(&self, target: PollTarget) {
        self.counters.polls.fetch_add(1, Ordering::Relaxed);

        if let Err(e) = self.fetch(target).await {
            self.counters.failures.fetch_add(1, Ordering::Relaxed);
            warn!("Polling {} failed, keeping previous value: {}", target.endpoint(), e);
        }
    }

    /// Fetch and decode one target, then swap it into the store
    async fn fetch(&self, target: PollTarget) -> Result<()> {
        let body = self.transport.get(target.endpoint().path()).await?;

        match target {
            PollTarget::Status => {
                let status: PlayerStatus = decode(&body)?;
                debug!("Status: {} - {}", status.state, status.display_title());
                self.store.replace_status(status);
            }
            PollTarget::SyncStatus => {
                let sync_status: SyncStatus = decode(&body)?;
                debug!("SyncStatus: {} ({})", sync_status.name, sync_status.model_name);
                self.store.replace_sync_status(sync_status);
            }
        }

        Ok(())
    }
}
