use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use noya_runtime::{Config, Error, LiveEvent, NewReport, Noya, WatchConfig};
use noya_types::{ReportPatch, SpaceId};
use std::time::Duration;
use tempfile::TempDir;

const WAIT: Duration = Duration::from_secs(5);

fn open_signed_in(dir: &TempDir, email: &str) -> Noya {
    let mut config = Config::default();
    config.watch = WatchConfig {
        poll_interval_ms: 20,
        external_changes: false,
    };
    let mut noya = Noya::open_with_config(dir.path(), config).unwrap();
    noya.sign_up("Tester", email, "secret1").unwrap();
    noya
}

fn report_on(day: u32, progress: &str) -> NewReport {
    NewReport {
        progress: progress.to_string(),
        next_step: String::new(),
        date: Some(Utc.with_ymd_and_hms(2030, 1, day, 0, 0, 0).unwrap()),
    }
}

#[test]
fn test_last_updated_falls_back_to_created_at() {
    let dir = TempDir::new().unwrap();
    let noya = open_signed_in(&dir, "a@example.com");
    let spaces = noya.spaces().unwrap();

    let space = spaces.create("Empty", "").unwrap();
    let list = spaces.list().unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].progress_count, 0);
    assert_eq!(list[0].last_updated, space.created_at);
}

#[test]
fn test_last_updated_is_latest_report_date() {
    let dir = TempDir::new().unwrap();
    let noya = open_signed_in(&dir, "a@example.com");
    let spaces = noya.spaces().unwrap();
    let reports = noya.reports().unwrap();

    let space = spaces.create("Busy", "").unwrap();
    reports.add(&space.id, report_on(5, "a")).unwrap();
    let latest = reports.add(&space.id, report_on(17, "b")).unwrap();
    reports.add(&space.id, report_on(9, "c")).unwrap();

    let summary = spaces.summary(&space.id).unwrap();
    assert_eq!(summary.progress_count, 3);
    assert_eq!(summary.last_updated, latest.date);
    assert_eq!(spaces.list().unwrap()[0], summary);
}

#[test]
fn test_pinned_spaces_sort_first() {
    let dir = TempDir::new().unwrap();
    let noya = open_signed_in(&dir, "a@example.com");
    let spaces = noya.spaces().unwrap();

    let oldest = spaces.create("Oldest", "").unwrap();
    std::thread::sleep(Duration::from_millis(5));
    let middle = spaces.create("Middle", "").unwrap();
    std::thread::sleep(Duration::from_millis(5));
    let newest = spaces.create("Newest", "").unwrap();
    spaces.toggle_pin(&oldest.id).unwrap();

    let order: Vec<SpaceId> = spaces.list().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(order, vec![oldest.id, newest.id, middle.id]);
}

#[test]
fn test_delete_space_leaves_no_orphans() {
    let dir = TempDir::new().unwrap();
    let noya = open_signed_in(&dir, "a@example.com");
    let spaces = noya.spaces().unwrap();
    let reports = noya.reports().unwrap();

    let doomed = spaces.create("Doomed", "").unwrap();
    let kept = spaces.create("Kept", "").unwrap();
    for day in 1..=4 {
        reports.add(&doomed.id, report_on(day, "x")).unwrap();
    }
    reports.add(&kept.id, report_on(1, "y")).unwrap();

    let deletion = spaces.delete(&doomed.id).unwrap();

    assert_eq!(deletion.reports_deleted, 4);
    let uid = noya.require_user().unwrap();
    assert_eq!(noya.database().count_orphan_reports(uid).unwrap(), 0);
    assert_eq!(noya.database().count_reports(uid, &doomed.id).unwrap(), 0);
    assert_eq!(reports.list(&kept.id).unwrap().len(), 1);
    assert!(matches!(spaces.get(&doomed.id).unwrap_err(), Error::NotFound(_)));
}

#[test]
fn test_edit_updates_last_modified_each_time() {
    let dir = TempDir::new().unwrap();
    let noya = open_signed_in(&dir, "a@example.com");
    let space = noya.spaces().unwrap().create("S", "").unwrap();
    let reports = noya.reports().unwrap();
    let report = reports.add(&space.id, report_on(1, "draft")).unwrap();

    let first = reports
        .edit(
            &space.id,
            &report.id,
            ReportPatch {
                progress: Some("final".to_string()),
                ..ReportPatch::default()
            },
        )
        .unwrap();
    std::thread::sleep(Duration::from_millis(2));
    let second = reports
        .edit(&space.id, &report.id, ReportPatch::default())
        .unwrap();

    assert_eq!(first.progress, "final");
    let (Some(a), Some(b)) = (first.last_modified, second.last_modified) else {
        panic!("edits must stamp last_modified");
    };
    assert!(b > a);
    assert!(b - a < ChronoDuration::seconds(5));
}

#[test]
fn test_users_are_isolated() {
    let dir = TempDir::new().unwrap();
    let mut noya = open_signed_in(&dir, "alice@example.com");
    let alice_space = noya.spaces().unwrap().create("Alice's", "").unwrap();

    noya.sign_out().unwrap();
    noya.sign_up("Bob", "bob@example.com", "secret2").unwrap();
    let spaces = noya.spaces().unwrap();
    let reports = noya.reports().unwrap();

    assert!(spaces.list().unwrap().is_empty());
    assert!(matches!(spaces.get(&alice_space.id).unwrap_err(), Error::NotFound(_)));
    assert!(matches!(
        spaces.update(&alice_space.id, "mine now", "").unwrap_err(),
        Error::NotFound(_)
    ));
    assert!(matches!(spaces.delete(&alice_space.id).unwrap_err(), Error::NotFound(_)));
    assert!(matches!(
        reports.add(&alice_space.id, report_on(1, "sneaky")).unwrap_err(),
        Error::NotFound(_)
    ));
}

#[test]
fn test_live_space_list_emits_after_each_write() {
    let dir = TempDir::new().unwrap();
    let noya = open_signed_in(&dir, "a@example.com");
    let query = noya.watch_spaces().unwrap();

    let initial = query.recv_timeout(WAIT).and_then(LiveEvent::into_snapshot);
    assert_eq!(initial.map(|list| list.len()), Some(0));

    let spaces = noya.spaces().unwrap();
    let space = spaces.create("Live", "").unwrap();
    let after_create = query.recv_timeout(WAIT).and_then(LiveEvent::into_snapshot).unwrap();
    assert_eq!(after_create.len(), 1);
    assert_eq!(after_create[0].progress_count, 0);

    noya.reports()
        .unwrap()
        .add(&space.id, report_on(3, "first"))
        .unwrap();
    let after_report = query.recv_timeout(WAIT).and_then(LiveEvent::into_snapshot).unwrap();
    assert_eq!(after_report[0].progress_count, 1);

    spaces.toggle_pin(&space.id).unwrap();
    let after_pin = query.recv_timeout(WAIT).and_then(LiveEvent::into_snapshot).unwrap();
    assert!(after_pin[0].pinned);
}

#[test]
fn test_live_report_list_tracks_one_space() {
    let dir = TempDir::new().unwrap();
    let noya = open_signed_in(&dir, "a@example.com");
    let spaces = noya.spaces().unwrap();
    let reports = noya.reports().unwrap();
    let watched = spaces.create("Watched", "").unwrap();
    let other = spaces.create("Other", "").unwrap();

    let query = noya.watch_reports(&watched.id).unwrap();
    let initial = query.recv_timeout(WAIT).and_then(LiveEvent::into_snapshot);
    assert_eq!(initial, Some(vec![]));

    reports.add(&other.id, report_on(1, "elsewhere")).unwrap();
    let added = reports.add(&watched.id, report_on(2, "here")).unwrap();

    let snapshot = query.recv_timeout(WAIT).and_then(LiveEvent::into_snapshot).unwrap();
    assert_eq!(snapshot, vec![added]);
}

#[test]
fn test_watch_reports_of_unknown_space_fails() {
    let dir = TempDir::new().unwrap();
    let noya = open_signed_in(&dir, "a@example.com");
    assert!(matches!(
        noya.watch_reports(&SpaceId::from("missing")).err(),
        Some(Error::NotFound(_))
    ));
}
