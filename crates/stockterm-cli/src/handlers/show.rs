use anyhow::{Result, bail};
use std::sync::Arc;

use stockterm_runtime::SnapshotFetcher;
use stockterm_store::SnapshotSource;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;

pub fn handle(ctx: &HandlerContext, source: Arc<dyn SnapshotSource>, code: &str) -> Result<()> {
    let snapshot = SnapshotFetcher::new(source).fetch_blocking()?;
    let wanted = code.trim().to_uppercase();

    let Some(record) = snapshot
        .records
        .iter()
        .find(|r| r.code.as_str().eq_ignore_ascii_case(&wanted))
    else {
        bail!(
            "Stock '{}' not found in snapshot {}",
            wanted,
            snapshot.date.as_deref().unwrap_or("-")
        );
    };

    ctx.render(CommandResultViewModel::new(presenters::present_detail(record)))
}
