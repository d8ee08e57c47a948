use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use noya_runtime::Noya;

pub fn handle_show(workspace: &Noya, ctx: &HandlerContext) -> Result<()> {
    let profile = workspace
        .profiles()?
        .get()?
        .ok_or_else(|| anyhow!("no profile stored for the signed-in user"))?;

    ctx.render(presenters::present_profile(&profile, false))
}

pub fn handle_rename(workspace: &Noya, name: &str, ctx: &HandlerContext) -> Result<()> {
    let profile = workspace.profiles()?.rename(name)?;
    ctx.render(presenters::present_profile(&profile, true))
}
