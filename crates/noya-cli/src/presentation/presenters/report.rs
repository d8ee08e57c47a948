use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CommandResultViewModel, DateStyle, Guidance, ReportAction, ReportChangeViewModel,
    ReportEntryViewModel, ReportListViewModel, StatusBadge,
};
use noya_engine::ReportTimeline;
use noya_types::{DocPath, ProgressReport, Space, UserId};

pub fn report_entry(uid: &UserId, report: &ProgressReport) -> ReportEntryViewModel {
    ReportEntryViewModel {
        id: report.id.to_string(),
        id_short: report.id.short().to_string(),
        path: DocPath::Report(uid.clone(), report.space_id.clone(), report.id.clone()).to_string(),
        date: report.date,
        progress: report.progress.clone(),
        next_step: report.next_step.clone(),
        markdown_note: report.markdown_note.clone(),
        has_note: report.has_note(),
        edited: report.is_edited(),
        last_modified: report.last_modified,
    }
}

pub fn present_report_list(
    space: &Space,
    timeline: ReportTimeline,
    dates: DateStyle,
) -> CommandResultViewModel<ReportListViewModel> {
    let content = ReportListViewModel {
        space_id: space.id.to_string(),
        space_name: space.name.clone(),
        reports: timeline
            .reports
            .iter()
            .map(|r| report_entry(&space.owner, r))
            .collect(),
        edited_count: timeline.edited_count,
        noted_count: timeline.noted_count,
        first_date: timeline.first_date,
        last_date: timeline.last_date,
        dates,
    };

    let result = CommandResultViewModel::new(content);

    if timeline.is_empty() {
        return result
            .with_badge(StatusBadge::info(format!("No reports in '{}'", space.name)))
            .with_suggestion(
                Guidance::new("Add the first progress report")
                    .with_command(fmt::report_add(space.id.short())),
            );
    }

    result.with_badge(StatusBadge::success(format!(
        "{} report(s) in '{}'",
        timeline.len(),
        space.name
    )))
}

pub fn present_report_change(
    action: ReportAction,
    space: &Space,
    report: &ProgressReport,
    dates: DateStyle,
) -> CommandResultViewModel<ReportChangeViewModel> {
    let content = ReportChangeViewModel {
        action,
        space_id: space.id.to_string(),
        report: report_entry(&space.owner, report),
        dates,
    };

    let badge = match action {
        ReportAction::Added => StatusBadge::success("Report added"),
        ReportAction::Edited => StatusBadge::success("Report edited"),
        ReportAction::Annotated => StatusBadge::success("Note saved"),
        ReportAction::NoteCleared => StatusBadge::success("Note cleared"),
        ReportAction::NoteUnchanged => StatusBadge::info("Note unchanged"),
        ReportAction::Deleted => StatusBadge::success("Report deleted"),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    match action {
        ReportAction::Added => {
            result = result.with_suggestion(
                Guidance::new("Attach a markdown note")
                    .with_command(fmt::report_note(space.id.short(), report.id.short())),
            );
        }
        ReportAction::Deleted => {
            result = result.with_suggestion(
                Guidance::new("Remaining reports").with_command(fmt::report_list(space.id.short())),
            );
        }
        _ => {}
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use noya_types::{ReportId, SpaceId};

    fn space() -> Space {
        Space {
            id: SpaceId::from("s1"),
            owner: UserId::from("u1"),
            name: "Thesis".to_string(),
            description: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            pinned: false,
        }
    }

    fn report(id: &str, day: u32, edited: bool) -> ProgressReport {
        let date = Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap();
        ProgressReport {
            id: ReportId::from(id),
            space_id: SpaceId::from("s1"),
            date,
            progress: format!("progress {}", id),
            next_step: String::new(),
            markdown_note: String::new(),
            last_modified: edited.then_some(date),
        }
    }

    #[test]
    fn test_entry_carries_path_and_flags() {
        let entry = report_entry(&UserId::from("u1"), &report("r1", 2, true));
        assert_eq!(entry.path, "users/u1/spaces/s1/progress_reports/r1");
        assert!(entry.edited);
        assert!(!entry.has_note);
    }

    #[test]
    fn test_empty_list_suggests_add() {
        let result = present_report_list(
            &space(),
            ReportTimeline::build(vec![]),
            DateStyle::default(),
        );
        assert_eq!(
            result.badge.map(|b| b.label).as_deref(),
            Some("No reports in 'Thesis'")
        );
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("noya report add s1 --progress <TEXT>")
        );
    }

    #[test]
    fn test_list_keeps_timeline_order() {
        let timeline = ReportTimeline::build(vec![report("a", 1, false), report("b", 3, true)]);
        let result = present_report_list(&space(), timeline, DateStyle::default());

        let ids: Vec<_> = result.content.reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(result.content.edited_count, 1);
    }

    #[test]
    fn test_unchanged_note_is_informational() {
        let result = present_report_change(
            ReportAction::NoteUnchanged,
            &space(),
            &report("r1", 2, false),
            DateStyle::default(),
        );
        let badge = result.badge.unwrap();
        assert_eq!(badge.label, "Note unchanged");
        assert!(result.suggestions.is_empty());
    }
}
