use anyhow::Result;
use std::sync::Arc;

use stockterm_engine::{FilterState, SortState};
use stockterm_runtime::{Screener, SnapshotFetcher, Workspace};
use stockterm_store::SnapshotSource;

use crate::presentation::TuiRenderer;

pub fn handle(
    workspace: &Workspace,
    source: Arc<dyn SnapshotSource>,
    filter: FilterState,
    sort: SortState,
) -> Result<()> {
    let view = &workspace.config().view;
    let screener = Screener::new(view).with_filter(filter).with_sort(sort);
    let fetcher = SnapshotFetcher::new(source);

    tracing::info!(source = %fetcher.describe(), "starting screen");

    TuiRenderer::new(
        screener,
        fetcher,
        workspace.config().display.clone(),
        view.row_extent,
    )
    .run()
}
