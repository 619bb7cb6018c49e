use anyhow::Result;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_presets())
}
