use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::SpaceAction;
use anyhow::{Result, bail};
use noya_runtime::Noya;

pub fn handle_list(workspace: &Noya, ctx: &HandlerContext) -> Result<()> {
    let spaces = workspace.spaces()?.list()?;
    ctx.render(presenters::present_space_list(spaces, ctx.dates()))
}

pub fn handle_create(
    workspace: &Noya,
    name: &str,
    description: &str,
    ctx: &HandlerContext,
) -> Result<()> {
    let space = workspace.spaces()?.create(name, description)?;
    ctx.render(presenters::present_space_change(SpaceAction::Created, &space))
}

pub fn handle_show(workspace: &Noya, space: &str, ctx: &HandlerContext) -> Result<()> {
    let spaces = workspace.spaces()?;
    let space_id = spaces.resolve(space)?;
    let summary = spaces.summary(&space_id)?;
    let reports = workspace.reports()?.list(&space_id)?;

    ctx.render(presenters::present_space_detail(summary, reports, ctx.dates()))
}

/// Fields left out keep their current value.
pub fn handle_edit(
    workspace: &Noya,
    space: &str,
    name: Option<String>,
    description: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    if name.is_none() && description.is_none() {
        bail!("nothing to change: pass --name and/or --description");
    }

    let spaces = workspace.spaces()?;
    let space_id = spaces.resolve(space)?;
    let current = spaces.get(&space_id)?;

    let name = name.unwrap_or(current.name);
    let description = description.unwrap_or(current.description);
    let updated = spaces.update(&space_id, &name, &description)?;

    ctx.render(presenters::present_space_change(SpaceAction::Updated, &updated))
}

pub fn handle_delete(workspace: &Noya, space: &str, ctx: &HandlerContext) -> Result<()> {
    let spaces = workspace.spaces()?;
    let space_id = spaces.resolve(space)?;
    let deletion = spaces.delete(&space_id)?;

    ctx.render(presenters::present_space_deleted(&deletion))
}

pub fn handle_pin(workspace: &Noya, space: &str, ctx: &HandlerContext) -> Result<()> {
    let spaces = workspace.spaces()?;
    let space_id = spaces.resolve(space)?;
    let space = spaces.toggle_pin(&space_id)?;

    let action = if space.pinned {
        SpaceAction::Pinned
    } else {
        SpaceAction::Unpinned
    };
    ctx.render(presenters::present_space_change(action, &space))
}
