use noya_types::{ReportId, SpaceId, UserId};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex, MutexGuard};

/// A write that may invalidate live snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Space {
        uid: UserId,
        space_id: SpaceId,
    },
    Report {
        uid: UserId,
        space_id: SpaceId,
        report_id: ReportId,
    },
    Profile {
        uid: UserId,
    },
    /// The database file changed underneath us (another process)
    External,
}

impl Change {
    /// Does this change alter the space list of `uid`?
    ///
    /// Report writes count: they move `progress_count` and `last_updated`.
    pub fn affects_spaces_of(&self, uid: &UserId) -> bool {
        match self {
            Change::Space { uid: owner, .. } | Change::Report { uid: owner, .. } => owner == uid,
            Change::Profile { .. } => false,
            Change::External => true,
        }
    }

    pub fn affects_reports_of(&self, uid: &UserId, space_id: &SpaceId) -> bool {
        match self {
            Change::Space {
                uid: owner,
                space_id: changed,
            }
            | Change::Report {
                uid: owner,
                space_id: changed,
                ..
            } => owner == uid && changed == space_id,
            Change::Profile { .. } => false,
            Change::External => true,
        }
    }
}

/// Fan-out of [`Change`] notifications to live queries in this process.
#[derive(Debug, Clone, Default)]
pub struct ChangeBus {
    subscribers: Arc<Mutex<Vec<Sender<Change>>>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<Change> {
        let (tx, rx) = channel();
        self.attach(tx);
        rx
    }

    pub fn attach(&self, tx: Sender<Change>) {
        self.lock().push(tx);
    }

    /// Deliver to every live subscriber; disconnected ones are dropped.
    pub fn publish(&self, change: Change) {
        tracing::debug!(?change, "publish");
        self.lock().retain(|tx| tx.send(change.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Sender<Change>>> {
        // A panicked subscriber cannot leave the sender list half-written.
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
