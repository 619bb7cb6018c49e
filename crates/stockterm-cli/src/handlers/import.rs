use anyhow::{Context, Result, bail};
use std::path::Path;

use stockterm_runtime::Workspace;
use stockterm_store::{Database, load_documents};
use stockterm_types::normalize_snapshot_date;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    ctx: &HandlerContext,
    workspace: &Workspace,
    path: &Path,
    date: Option<&str>,
) -> Result<()> {
    if !path.exists() {
        bail!("Import path does not exist: {}", path.display());
    }

    let mut records = load_documents(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let undated = records.iter().filter(|r| r.date.trim().is_empty()).count();
    if undated > 0 {
        let Some(date) = date else {
            bail!(
                "{} of {} records carry no date; pass --date YYYY-MM-DD",
                undated,
                records.len()
            );
        };
        for record in records.iter_mut().filter(|r| r.date.trim().is_empty()) {
            record.date = date.to_string();
        }
    }

    if let Some(bad) = records
        .iter()
        .find(|r| normalize_snapshot_date(&r.date).is_err())
    {
        bail!(
            "Record {} has snapshot date '{}'; expected YYYY-MM-DD",
            bad.code,
            bad.date
        );
    }

    let db_path = workspace.database_path();
    let db = Database::open(&db_path)?;
    let imported = db.insert_records(&records)?;
    let dates = db.list_dates()?;

    tracing::info!(path = %path.display(), imported, "import finished");

    ctx.render(presenters::present_import(path, &db_path, imported, dates))
}
