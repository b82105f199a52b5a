//! Shared snapshot of the most recent poll results

use bluesound_parser::{PlayerStatus, SyncStatus};
use parking_lot::RwLock;
use std::time::SystemTime;

/// The last successfully decoded `Status` and `SyncStatus` documents
///
/// Both records start zero-valued and are replaced wholesale; a failed poll
/// leaves the previous value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub status: PlayerStatus,
    pub sync_status: SyncStatus,
    /// When `status` was last replaced
    pub status_updated: Option<SystemTime>,
    /// When `sync_status` was last replaced
    pub sync_status_updated: Option<SystemTime>,
}

impl StatusSnapshot {
    /// True once at least one `Status` poll succeeded
    pub fn has_status(&self) -> bool {
        self.status_updated.is_some()
    }

    pub fn has_sync_status(&self) -> bool {
        self.sync_status_updated.is_some()
    }
}

/// Thread-safe holder for the [`StatusSnapshot`]
///
/// The poller is the only writer. Writes take the lock just for the
/// assignment, so readers never see a half-updated record and never wait on
/// network I/O.
#[derive(Debug, Default)]
pub struct StatusStore {
    inner: RwLock<StatusSnapshot>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current playback status
    pub fn status(&self) -> PlayerStatus {
        self.inner.read().status.clone()
    }

    /// Clone of the current identity and group status
    pub fn sync_status(&self) -> SyncStatus {
        self.inner.read().sync_status.clone()
    }

    /// Clone of both records taken under a single read lock
    pub fn snapshot(&self) -> StatusSnapshot {
        self.inner.read().clone()
    }

    pub fn replace_status(&self, status: PlayerStatus) {
        let mut inner = self.inner.write();
        inner.status = status;
        inner.status_updated = Some(SystemTime::now());
    }

    pub fn replace_sync_status(&self, sync_status: SyncStatus) {
        let mut inner = self.inner.write();
        inner.sync_status = sync_status;
        inner.sync_status_updated = Some(SystemTime::now());
    }
}
