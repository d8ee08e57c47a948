use crate::{Change, ChangeBus, Result, WatchConfig};
use noya_store::Database;
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

const MIN_POLL_INTERVAL_MS: u64 = 10;

/// What a live query delivers to its subscriber.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveEvent<T> {
    Snapshot(T),
    /// A rebuild failed; the query keeps running
    Error(String),
}

impl<T> LiveEvent<T> {
    pub fn into_snapshot(self) -> Option<T> {
        match self {
            LiveEvent::Snapshot(value) => Some(value),
            LiveEvent::Error(_) => None,
        }
    }
}

/// Handle to a running subscription. Dropping it stops delivery.
pub struct LiveQuery<T> {
    rx: Receiver<LiveEvent<T>>,
    stop: Arc<AtomicBool>,
    _watcher: Option<PollWatcher>,
    _handle: JoinHandle<()>,
}

impl<T> LiveQuery<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Spawn the worker thread.
    ///
    /// The worker owns its own connection to `db_path`. It emits one snapshot
    /// immediately, then rebuilds on every change accepted by `is_relevant`.
    /// In-process changes always produce a snapshot; file-level changes only
    /// when the rebuilt snapshot differs from the last one sent.
    pub(crate) fn start<F, R>(
        name: &str,
        db_path: &Path,
        bus: &ChangeBus,
        watch: &WatchConfig,
        is_relevant: R,
        mut fetch: F,
    ) -> Result<Self>
    where
        F: FnMut(&Database) -> Result<T> + Send + 'static,
        R: Fn(&Change) -> bool + Send + 'static,
    {
        let poll_interval = Duration::from_millis(watch.poll_interval_ms.max(MIN_POLL_INTERVAL_MS));
        let (tx_change, rx_change) = channel();
        let (tx_out, rx_out) = channel();

        let db = Database::open(db_path)?;

        let watcher = if watch.external_changes {
            Some(watch_database_file(
                db_path,
                tx_change.clone(),
                poll_interval,
            )?)
        } else {
            None
        };
        bus.attach(tx_change);

        let stop = Arc::new(AtomicBool::new(false));
        let stop_worker = stop.clone();

        let handle = std::thread::Builder::new()
            .name(format!("live-{}", name))
            .spawn(move || {
                let mut last = None;
                if !rebuild(&db, &mut fetch, &tx_out, &mut last, true) {
                    return;
                }

                while !stop_worker.load(Ordering::Relaxed) {
                    match rx_change.recv_timeout(poll_interval) {
                        Ok(change) => {
                            if !is_relevant(&change) || stop_worker.load(Ordering::Relaxed) {
                                continue;
                            }
                            let force = change != Change::External;
                            if !rebuild(&db, &mut fetch, &tx_out, &mut last, force) {
                                break;
                            }
                        }
                        Err(RecvTimeoutError::Timeout) => {}
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::debug!("live query stopped");
            })?;

        tracing::debug!(query = name, path = %db_path.display(), "live query started");

        Ok(Self {
            rx: rx_out,
            stop,
            _watcher: watcher,
            _handle: handle,
        })
    }
}

impl<T> LiveQuery<T> {
    /// Block until the next event. `None` once the worker has stopped.
    pub fn recv(&self) -> Option<LiveEvent<T>> {
        self.rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<LiveEvent<T>> {
        self.rx.recv_timeout(timeout).ok()
    }

    pub fn try_recv(&self) -> Option<LiveEvent<T>> {
        self.rx.try_recv().ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = LiveEvent<T>> + '_ {
        self.rx.iter()
    }
}

impl<T> Drop for LiveQuery<T> {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Returns `false` when the subscriber has gone away.
fn rebuild<T, F>(
    db: &Database,
    fetch: &mut F,
    tx: &Sender<LiveEvent<T>>,
    last: &mut Option<T>,
    force: bool,
) -> bool
where
    T: Clone + PartialEq,
    F: FnMut(&Database) -> Result<T>,
{
    let event = match fetch(db) {
        Ok(snapshot) => {
            if !force && last.as_ref() == Some(&snapshot) {
                return true;
            }
            *last = Some(snapshot.clone());
            LiveEvent::Snapshot(snapshot)
        }
        Err(err) => {
            tracing::warn!(error = %err, "live query rebuild failed");
            LiveEvent::Error(err.to_string())
        }
    };
    tx.send(event).is_ok()
}

fn watch_database_file(
    path: &Path,
    tx: Sender<Change>,
    poll_interval: Duration,
) -> Result<PollWatcher> {
    let config = notify::Config::default().with_poll_interval(poll_interval);

    let mut watcher = PollWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                    let _ = tx.send(Change::External);
                }
            }
            Err(err) => tracing::warn!(error = %err, "database watcher error"),
        },
        config,
    )?;
    watcher.watch(path, RecursiveMode::NonRecursive)?;

    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noya_types::{Space, SpaceId, UserId, now};
    use tempfile::TempDir;

    const WAIT: Duration = Duration::from_secs(5);

    fn in_process_only() -> WatchConfig {
        WatchConfig {
            poll_interval_ms: 20,
            external_changes: false,
        }
    }

    fn space(id: &str) -> Space {
        Space {
            id: SpaceId::from(id),
            owner: UserId::from("u1"),
            name: id.to_string(),
            description: String::new(),
            created_at: now(),
            pinned: false,
        }
    }

    fn count_query(dir: &TempDir, bus: &ChangeBus, watch: &WatchConfig) -> LiveQuery<usize> {
        let path = dir.path().join("noya.db");
        LiveQuery::start(
            "test",
            &path,
            bus,
            watch,
            |change| change.affects_spaces_of(&UserId::from("u1")),
            |db| Ok(db.list_spaces(&UserId::from("u1"))?.len()),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_snapshot_then_rebuild_on_change() {
        let dir = TempDir::new().unwrap();
        let bus = ChangeBus::new();
        let query = count_query(&dir, &bus, &in_process_only());

        assert_eq!(query.recv_timeout(WAIT), Some(LiveEvent::Snapshot(0)));

        let db = Database::open(&dir.path().join("noya.db")).unwrap();
        db.insert_space(&space("s1")).unwrap();
        bus.publish(Change::Space {
            uid: UserId::from("u1"),
            space_id: SpaceId::from("s1"),
        });

        assert_eq!(query.recv_timeout(WAIT), Some(LiveEvent::Snapshot(1)));
    }

    #[test]
    fn test_irrelevant_changes_are_ignored() {
        let dir = TempDir::new().unwrap();
        let bus = ChangeBus::new();
        let query = count_query(&dir, &bus, &in_process_only());
        assert_eq!(query.recv_timeout(WAIT), Some(LiveEvent::Snapshot(0)));

        bus.publish(Change::Space {
            uid: UserId::from("someone-else"),
            space_id: SpaceId::from("s9"),
        });

        assert_eq!(query.recv_timeout(Duration::from_millis(200)), None);
    }

    #[test]
    fn test_external_write_is_observed() {
        let dir = TempDir::new().unwrap();
        let bus = ChangeBus::new();
        let watch = WatchConfig {
            poll_interval_ms: 20,
            external_changes: true,
        };
        let query = count_query(&dir, &bus, &watch);
        assert_eq!(query.recv_timeout(WAIT), Some(LiveEvent::Snapshot(0)));

        // Separate connection, nothing published on the bus.
        std::thread::sleep(Duration::from_millis(50));
        let other = Database::open(&dir.path().join("noya.db")).unwrap();
        other.insert_space(&space("s1")).unwrap();

        let deadline = std::time::Instant::now() + WAIT;
        let mut seen = None;
        while std::time::Instant::now() < deadline {
            if let Some(LiveEvent::Snapshot(n)) = query.recv_timeout(Duration::from_millis(100)) {
                seen = Some(n);
                if n == 1 {
                    break;
                }
            }
        }
        assert_eq!(seen, Some(1));
    }
}
