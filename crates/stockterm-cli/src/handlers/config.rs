use anyhow::Result;

use stockterm_runtime::Workspace;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn show(ctx: &HandlerContext, workspace: &Workspace) -> Result<()> {
    ctx.render(presenters::present_config(workspace))
}

pub fn init(ctx: &HandlerContext, workspace: &Workspace) -> Result<()> {
    let written = workspace.init_config()?;
    ctx.render(presenters::present_config_init(&workspace.config_path(), written))
}
