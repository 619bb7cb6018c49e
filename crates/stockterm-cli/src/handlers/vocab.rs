use anyhow::Result;
use std::sync::Arc;

use stockterm_runtime::SnapshotFetcher;
use stockterm_store::SnapshotSource;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    ctx: &HandlerContext,
    source: Arc<dyn SnapshotSource>,
    sector: Option<&str>,
) -> Result<()> {
    let snapshot = SnapshotFetcher::new(source).fetch_blocking()?;
    ctx.render(presenters::present_vocabulary(&snapshot, sector))
}
