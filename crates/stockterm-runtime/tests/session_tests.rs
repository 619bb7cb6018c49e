use std::sync::Arc;

use stockterm_engine::{SortDirection, SortField, SortState};
use stockterm_runtime::*;
use stockterm_store::{Database, MemorySource, SqliteSource};
use stockterm_types::{Action, Snapshot, StockRecord};
use tempfile::TempDir;

fn record(date: &str, code: &str, score: f64, action: Action) -> StockRecord {
    let mut r = StockRecord::new(code);
    r.date = date.to_string();
    r.score = Some(score);
    r.action = Some(action);
    r
}

#[test]
fn test_fetch_then_screen_from_sqlite_workspace() -> Result<()> {
    let dir = TempDir::new()?;
    let workspace = Workspace::open(dir.path())?;
    let db = Database::open(&workspace.database_path())?;
    db.insert_records(&[
        record("2025-01-10", "AAA", 90.0, Action::Buy),
        record("2025-01-10", "BBB", 70.0, Action::Hold),
        record("2025-01-10", "CCC", 85.0, Action::Buy),
    ])?;
    drop(db);

    let mut fetcher = SnapshotFetcher::new(Arc::new(SqliteSource::new(workspace.database_path())));
    let mut screener = Screener::new(&workspace.config().view);

    screener.begin_fetch()?;
    fetcher.request()?;
    let outcome = fetcher.wait().expect("fetch was requested");
    screener.complete_fetch(outcome);

    screener.update_filter(|f| f.toggle_action(Action::Buy));
    screener.set_sort(SortState::by(SortField::Score, SortDirection::Desc));

    let codes: Vec<&str> = screener.rows().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["AAA", "CCC"]);
    assert_eq!(screener.status(), ScreenStatus::Ready);
    Ok(())
}

#[test]
fn test_failed_fetch_surfaces_reason() {
    let mut fetcher = SnapshotFetcher::new(Arc::new(MemorySource::failing("no route to host")));
    let mut screener = Screener::new(&ViewConfig::default());

    screener.begin_fetch().unwrap();
    fetcher.request().unwrap();
    screener.complete_fetch(fetcher.wait().unwrap());

    match screener.status() {
        ScreenStatus::Failed(reason) => assert!(reason.contains("no route to host")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_refresh_replaces_snapshot_wholesale() {
    let first = Snapshot::new(
        Some("2025-01-09".to_string()),
        vec![record("2025-01-09", "OLD", 50.0, Action::Hold)],
    );
    let second = Snapshot::new(
        Some("2025-01-10".to_string()),
        vec![
            record("2025-01-10", "NEW1", 60.0, Action::Buy),
            record("2025-01-10", "NEW2", 40.0, Action::Avoid),
        ],
    );

    let mut screener = Screener::new(&ViewConfig::default());
    screener.complete_fetch(Ok(first));
    assert_eq!(screener.focused_record().map(|r| r.code.as_str()), Some("OLD"));

    screener.begin_fetch().unwrap();
    screener.complete_fetch(Ok(second));
    assert_eq!(screener.snapshot().date.as_deref(), Some("2025-01-10"));
    assert_eq!(screener.view().len(), 2);
    assert_eq!(screener.focused_record().map(|r| r.code.as_str()), Some("NEW1"));
}
