use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::ReportAction;
use anyhow::{Result, bail};
use noya_runtime::{NewReport, Noya};
use noya_types::{ReportPatch, Space, Timestamp, parse_report_date};

pub fn handle_list(workspace: &Noya, space: &str, ctx: &HandlerContext) -> Result<()> {
    let space = resolve_space(workspace, space)?;
    let timeline = workspace.reports()?.timeline(&space.id)?;

    ctx.render(presenters::present_report_list(&space, timeline, ctx.dates()))
}

pub fn handle_add(
    workspace: &Noya,
    space: &str,
    progress: String,
    next_step: String,
    date: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let space = resolve_space(workspace, space)?;
    let new = NewReport {
        progress,
        next_step,
        date: parse_date(date.as_deref())?,
    };
    let report = workspace.reports()?.add(&space.id, new)?;

    ctx.render(presenters::present_report_change(
        ReportAction::Added,
        &space,
        &report,
        ctx.dates(),
    ))
}

pub fn handle_edit(
    workspace: &Noya,
    space: &str,
    report: &str,
    progress: Option<String>,
    next_step: Option<String>,
    date: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    if progress.is_none() && next_step.is_none() && date.is_none() {
        bail!("nothing to change: pass --progress, --next-step or --date");
    }

    let space = resolve_space(workspace, space)?;
    let reports = workspace.reports()?;
    let report_id = reports.resolve(&space.id, report)?;

    let patch = ReportPatch {
        progress,
        next_step,
        markdown_note: None,
        date: parse_date(date.as_deref())?,
    };
    let report = reports.edit(&space.id, &report_id, patch)?;

    ctx.render(presenters::present_report_change(
        ReportAction::Edited,
        &space,
        &report,
        ctx.dates(),
    ))
}

pub fn handle_note(
    workspace: &Noya,
    space: &str,
    report: &str,
    note: Option<String>,
    clear: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let note = match (note, clear) {
        (_, true) => String::new(),
        (Some(note), false) => note,
        (None, false) => bail!("pass the note text, or --clear to remove it"),
    };

    let space = resolve_space(workspace, space)?;
    let reports = workspace.reports()?;
    let report_id = reports.resolve(&space.id, report)?;

    let before = reports.get(&space.id, &report_id)?;
    let after = reports.annotate(&space.id, &report_id, &note)?;

    let action = if after.markdown_note == before.markdown_note {
        ReportAction::NoteUnchanged
    } else if after.markdown_note.is_empty() {
        ReportAction::NoteCleared
    } else {
        ReportAction::Annotated
    };

    ctx.render(presenters::present_report_change(
        action,
        &space,
        &after,
        ctx.dates(),
    ))
}

pub fn handle_delete(
    workspace: &Noya,
    space: &str,
    report: &str,
    ctx: &HandlerContext,
) -> Result<()> {
    let space = resolve_space(workspace, space)?;
    let reports = workspace.reports()?;
    let report_id = reports.resolve(&space.id, report)?;
    let removed = reports.delete(&space.id, &report_id)?;

    ctx.render(presenters::present_report_change(
        ReportAction::Deleted,
        &space,
        &removed,
        ctx.dates(),
    ))
}

pub(crate) fn resolve_space(workspace: &Noya, input: &str) -> Result<Space> {
    let spaces = workspace.spaces()?;
    let space_id = spaces.resolve(input)?;
    Ok(spaces.get(&space_id)?)
}

fn parse_date(value: Option<&str>) -> Result<Option<Timestamp>> {
    Ok(value.map(parse_report_date).transpose()?)
}
