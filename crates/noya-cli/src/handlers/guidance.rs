use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use noya_runtime::Noya;
use std::path::Path;

pub fn handle(workspace: &Noya, data_dir: &Path, ctx: &HandlerContext) -> Result<()> {
    let signed_in = workspace.current_user().is_some();

    let (user_name, space_count) = if signed_in {
        let name = workspace.profiles()?.get()?.map(|p| p.name);
        (name, workspace.spaces()?.list()?.len())
    } else {
        (None, 0)
    };

    let view_model = presenters::present_guidance(
        data_dir.display().to_string(),
        user_name,
        signed_in,
        space_count,
    );
    ctx.render(view_model)
}
