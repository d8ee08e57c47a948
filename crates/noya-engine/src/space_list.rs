use std::cmp::Ordering;
use std::collections::HashMap;

use noya_types::{Space, SpaceId, SpaceStats, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Display-ready space: stored fields plus the two derived ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceSummary {
    pub id: SpaceId,
    pub owner: UserId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub pinned: bool,
    /// Number of progress reports in the space
    pub progress_count: usize,
    /// Date of the most recent report, or `created_at` when there are none
    pub last_updated: Timestamp,
}

impl SpaceSummary {
    pub fn from_space(space: Space, stats: SpaceStats) -> Self {
        let last_updated = stats.latest_report.unwrap_or(space.created_at);
        Self {
            id: space.id,
            owner: space.owner,
            name: space.name,
            description: space.description,
            created_at: space.created_at,
            pinned: space.pinned,
            progress_count: stats.report_count,
            last_updated,
        }
    }

    pub fn has_reports(&self) -> bool {
        self.progress_count > 0
    }
}

/// Build the space list from a full snapshot of spaces and per-space report stats.
///
/// Spaces absent from `stats` have no reports. The result is always a full
/// rebuild, ordered pinned first, then newest first.
pub fn build_space_list(
    spaces: Vec<Space>,
    stats: &HashMap<SpaceId, SpaceStats>,
) -> Vec<SpaceSummary> {
    let mut list: Vec<SpaceSummary> = spaces
        .into_iter()
        .map(|space| {
            let space_stats = stats.get(&space.id).copied().unwrap_or_default();
            SpaceSummary::from_space(space, space_stats)
        })
        .collect();

    sort_spaces(&mut list);
    list
}

/// Pinned first, then `created_at` descending. Ties fall back to id so the
/// order is stable across rebuilds.
pub fn sort_spaces(spaces: &mut [SpaceSummary]) {
    spaces.sort_by(compare_spaces);
}

fn compare_spaces(a: &SpaceSummary, b: &SpaceSummary) -> Ordering {
    b.pinned
        .cmp(&a.pinned)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Header totals for a space list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceListSummary {
    pub total_spaces: usize,
    pub pinned_spaces: usize,
    pub total_reports: usize,
    pub last_activity: Option<Timestamp>,
}

impl SpaceListSummary {
    pub fn from_list(spaces: &[SpaceSummary]) -> Self {
        Self {
            total_spaces: spaces.len(),
            pinned_spaces: spaces.iter().filter(|s| s.pinned).count(),
            total_reports: spaces.iter().map(|s| s.progress_count).sum(),
            last_activity: spaces.iter().map(|s| s.last_updated).max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(day: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
    }

    fn space(id: &str, day: u32, pinned: bool) -> Space {
        Space {
            id: SpaceId::from(id),
            owner: UserId::from("u1"),
            name: id.to_uppercase(),
            description: String::new(),
            created_at: ts(day),
            pinned,
        }
    }

    fn stats(count: usize, latest_day: u32) -> SpaceStats {
        SpaceStats {
            report_count: count,
            latest_report: Some(ts(latest_day)),
        }
    }

    #[test]
    fn test_last_updated_falls_back_to_created_at() {
        let list = build_space_list(vec![space("a", 4, false)], &HashMap::new());

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].progress_count, 0);
        assert_eq!(list[0].last_updated, list[0].created_at);
        assert!(!list[0].has_reports());
    }

    #[test]
    fn test_last_updated_is_latest_report_date() {
        let mut map = HashMap::new();
        map.insert(SpaceId::from("a"), stats(3, 20));

        let list = build_space_list(vec![space("a", 4, false)], &map);

        assert_eq!(list[0].progress_count, 3);
        assert_eq!(list[0].last_updated, ts(20));
    }

    #[test]
    fn test_report_dated_before_creation_still_wins() {
        // A back-dated report is still "the most recent report".
        let mut map = HashMap::new();
        map.insert(SpaceId::from("a"), stats(1, 1));

        let list = build_space_list(vec![space("a", 10, false)], &map);

        assert_eq!(list[0].last_updated, ts(1));
    }

    #[test]
    fn test_pinned_before_unpinned_regardless_of_age() {
        let list = build_space_list(
            vec![
                space("new", 28, false),
                space("old-pinned", 1, true),
                space("mid", 14, false),
                space("newer-pinned", 5, true),
            ],
            &HashMap::new(),
        );

        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["newer-pinned", "old-pinned", "new", "mid"]);
    }

    #[test]
    fn test_order_ignores_activity() {
        // Ordering is by creation time, not by last update.
        let mut map = HashMap::new();
        map.insert(SpaceId::from("old"), stats(5, 30));

        let list = build_space_list(vec![space("old", 1, false), space("new", 2, false)], &map);

        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn test_ties_break_by_id() {
        let list = build_space_list(
            vec![space("b", 3, false), space("a", 3, false)],
            &HashMap::new(),
        );

        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_list_summary() {
        let mut map = HashMap::new();
        map.insert(SpaceId::from("a"), stats(2, 25));
        map.insert(SpaceId::from("b"), stats(1, 12));

        let list = build_space_list(
            vec![space("a", 1, true), space("b", 2, false), space("c", 3, false)],
            &map,
        );
        let summary = SpaceListSummary::from_list(&list);

        assert_eq!(summary.total_spaces, 3);
        assert_eq!(summary.pinned_spaces, 1);
        assert_eq!(summary.total_reports, 3);
        assert_eq!(summary.last_activity, Some(ts(25)));
    }

    #[test]
    fn test_empty_list_summary() {
        let summary = SpaceListSummary::from_list(&[]);
        assert_eq!(summary, SpaceListSummary::default());
    }

    #[test]
    fn test_space_summary_snapshot() {
        let mut map = HashMap::new();
        map.insert(SpaceId::from("a"), stats(2, 25));
        let list = build_space_list(vec![space("a", 1, true)], &map);

        insta::assert_json_snapshot!(list, @r###"
        [
          {
            "id": "a",
            "owner": "u1",
            "name": "A",
            "description": "",
            "created_at": "2025-03-01T12:00:00Z",
            "pinned": true,
            "progress_count": 2,
            "last_updated": "2025-03-25T12:00:00Z"
          }
        ]
        "###);
    }
}
