use anyhow::Result;
use std::sync::Arc;

use stockterm_engine::{FilterState, SortState};
use stockterm_runtime::{Screener, SnapshotFetcher, ViewConfig};
use stockterm_store::SnapshotSource;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    ctx: &HandlerContext,
    source: Arc<dyn SnapshotSource>,
    filter: FilterState,
    sort: SortState,
    limit: Option<usize>,
) -> Result<()> {
    let snapshot = SnapshotFetcher::new(source).fetch_blocking()?;

    let mut screener = Screener::new(&ViewConfig::default())
        .with_filter(filter)
        .with_sort(sort);
    screener.complete_fetch(Ok(snapshot));

    let view_model = presenters::present_stock_list(
        screener.snapshot(),
        screener.view(),
        screener.filter(),
        screener.sort(),
        limit,
    );
    ctx.render(view_model)
}
