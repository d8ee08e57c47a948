use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, DateStyle, Guidance, SpaceAction, SpaceChangeViewModel,
    SpaceDetailViewModel, SpaceEntryViewModel, SpaceListViewModel, StatusBadge,
};
use noya_engine::{SpaceListSummary, SpaceSummary};
use noya_runtime::SpaceDeletion;
use noya_types::{DocPath, ProgressReport, Space};

use super::report::report_entry;

const RECENT_REPORTS_LIMIT: usize = 5;

pub fn space_entry(summary: &SpaceSummary) -> SpaceEntryViewModel {
    SpaceEntryViewModel {
        id: summary.id.to_string(),
        id_short: summary.id.short().to_string(),
        path: DocPath::Space(summary.owner.clone(), summary.id.clone()).to_string(),
        name: summary.name.clone(),
        description: summary.description.clone(),
        pinned: summary.pinned,
        created_at: summary.created_at,
        last_updated: summary.last_updated,
        progress_count: summary.progress_count,
    }
}

pub fn present_space_list(
    spaces: Vec<SpaceSummary>,
    dates: DateStyle,
) -> CommandResultViewModel<SpaceListViewModel> {
    let totals = SpaceListSummary::from_list(&spaces);

    let content = SpaceListViewModel {
        spaces: spaces.iter().map(space_entry).collect(),
        pinned_count: totals.pinned_spaces,
        total_reports: totals.total_reports,
        last_activity: totals.last_activity,
        dates,
    };

    let mut result = CommandResultViewModel::new(content);

    if totals.total_spaces == 0 {
        return result
            .with_badge(StatusBadge::info("No spaces yet"))
            .with_suggestion(
                Guidance::new("Create your first research space").with_command(cmd::SPACE_CREATE),
            );
    }

    let label = if totals.pinned_spaces > 0 {
        format!(
            "{} space(s), {} pinned, {} report(s)",
            totals.total_spaces, totals.pinned_spaces, totals.total_reports
        )
    } else {
        format!(
            "{} space(s), {} report(s)",
            totals.total_spaces, totals.total_reports
        )
    };
    result = result.with_badge(StatusBadge::success(label));

    if let Some(empty) = spaces.iter().find(|s| !s.has_reports()) {
        result = result.with_suggestion(
            Guidance::new(format!("'{}' has no progress reports yet", empty.name))
                .with_command(fmt::report_add(empty.id.short())),
        );
    }

    result
}

/// `reports` must already be ordered newest first.
pub fn present_space_detail(
    summary: SpaceSummary,
    reports: Vec<ProgressReport>,
    dates: DateStyle,
) -> CommandResultViewModel<SpaceDetailViewModel> {
    let recent_reports = reports
        .iter()
        .take(RECENT_REPORTS_LIMIT)
        .map(|r| report_entry(&summary.owner, r))
        .collect();

    let content = SpaceDetailViewModel {
        space: space_entry(&summary),
        recent_reports,
        dates,
    };

    let mut result = CommandResultViewModel::new(content);

    if summary.has_reports() {
        if summary.progress_count > RECENT_REPORTS_LIMIT {
            result = result.with_suggestion(
                Guidance::new(format!(
                    "Showing {} of {} reports",
                    RECENT_REPORTS_LIMIT, summary.progress_count
                ))
                .with_command(fmt::report_list(summary.id.short())),
            );
        }
    } else {
        result = result.with_suggestion(
            Guidance::new("Record what you did today")
                .with_command(fmt::report_add(summary.id.short())),
        );
    }

    result
}

pub fn present_space_change(
    action: SpaceAction,
    space: &Space,
) -> CommandResultViewModel<SpaceChangeViewModel> {
    let content = SpaceChangeViewModel {
        action,
        space_id: space.id.to_string(),
        id_short: space.id.short().to_string(),
        name: space.name.clone(),
        pinned: space.pinned,
        reports_deleted: None,
    };

    let label = match action {
        SpaceAction::Created => "Space created",
        SpaceAction::Updated => "Space updated",
        SpaceAction::Pinned => "Space pinned",
        SpaceAction::Unpinned => "Space unpinned",
        SpaceAction::Deleted => "Space deleted",
    };

    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::success(label));

    if action == SpaceAction::Created {
        result = result
            .with_suggestion(
                Guidance::new("Add a progress report")
                    .with_command(fmt::report_add(space.id.short())),
            )
            .with_suggestion(
                Guidance::new("Keep it at the top of the list")
                    .with_command(fmt::space_pin(space.id.short())),
            );
    } else if action != SpaceAction::Deleted {
        result = result.with_suggestion(
            Guidance::new("See the space").with_command(fmt::space_show(space.id.short())),
        );
    }

    result
}

pub fn present_space_deleted(
    deletion: &SpaceDeletion,
) -> CommandResultViewModel<SpaceChangeViewModel> {
    let content = SpaceChangeViewModel {
        action: SpaceAction::Deleted,
        space_id: deletion.space_id.to_string(),
        id_short: deletion.space_id.short().to_string(),
        name: deletion.name.clone(),
        pinned: false,
        reports_deleted: Some(deletion.reports_deleted),
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Space deleted"))
        .with_suggestion(Guidance::new("Remaining spaces").with_command(cmd::SPACE_LIST))
}
