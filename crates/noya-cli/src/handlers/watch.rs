/// Watch handlers - print a snapshot on start and after every change
use super::HandlerContext;
use super::report::resolve_space;
use crate::presentation::presenters;
use anyhow::Result;
use noya_engine::ReportTimeline;
use noya_runtime::{LiveEvent, LiveQuery, Noya};

pub fn handle_spaces(workspace: &Noya, count: Option<usize>, ctx: &HandlerContext) -> Result<()> {
    let query = workspace.watch_spaces()?;

    stream(&query, count, |spaces| {
        ctx.render_streaming(presenters::present_space_list(spaces, ctx.dates()))
    })
}

pub fn handle_reports(
    workspace: &Noya,
    space: &str,
    count: Option<usize>,
    ctx: &HandlerContext,
) -> Result<()> {
    let space = resolve_space(workspace, space)?;
    let query = workspace.watch_reports(&space.id)?;

    stream(&query, count, |reports| {
        let timeline = ReportTimeline::build(reports);
        ctx.render_streaming(presenters::present_report_list(&space, timeline, ctx.dates()))
    })
}

/// Render snapshots until `count` is reached or the query stops.
fn stream<T, F>(query: &LiveQuery<T>, count: Option<usize>, mut render: F) -> Result<()>
where
    F: FnMut(T) -> Result<()>,
{
    if count == Some(0) {
        return Ok(());
    }

    let mut shown = 0;
    for event in query.iter() {
        match event {
            LiveEvent::Snapshot(snapshot) => {
                render(snapshot)?;
                shown += 1;
                if count.is_some_and(|limit| shown >= limit) {
                    break;
                }
            }
            LiveEvent::Error(message) => {
                tracing::warn!(error = %message, "live query rebuild failed");
                eprintln!("Warning: {}", message);
            }
        }
    }

    Ok(())
}
