use anyhow::Result;

use stockterm_runtime::Workspace;
use stockterm_store::Database;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, workspace: &Workspace) -> Result<()> {
    let db_path = workspace.database_path();
    let dates = if db_path.exists() {
        Database::open(&db_path)?.list_dates()?
    } else {
        Vec::new()
    };

    ctx.render(presenters::present_dates(&db_path, dates))
}
