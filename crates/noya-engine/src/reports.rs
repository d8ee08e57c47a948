use std::cmp::Ordering;

use noya_types::{ProgressReport, Timestamp};
use serde::Serialize;

/// Report date descending; ties fall back to id.
pub fn sort_reports(reports: &mut [ProgressReport]) {
    reports.sort_by(compare_reports);
}

fn compare_reports(a: &ProgressReport, b: &ProgressReport) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id))
}

/// Ordered reports of one space plus the counts shown in its header.
#[derive(Debug, Clone, Serialize)]
pub struct ReportTimeline {
    pub reports: Vec<ProgressReport>,
    pub edited_count: usize,
    pub noted_count: usize,
    pub first_date: Option<Timestamp>,
    pub last_date: Option<Timestamp>,
}

impl ReportTimeline {
    pub fn build(mut reports: Vec<ProgressReport>) -> Self {
        sort_reports(&mut reports);

        Self {
            edited_count: reports.iter().filter(|r| r.is_edited()).count(),
            noted_count: reports.iter().filter(|r| r.has_note()).count(),
            first_date: reports.last().map(|r| r.date),
            last_date: reports.first().map(|r| r.date),
            reports,
        }
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
