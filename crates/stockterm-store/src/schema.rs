use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// Records are stored whole as JSON documents keyed by (date, stock_code).
// Metrics are consumed as-is, so the payload is never split into columns.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        tracing::info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "migrating snapshot store schema"
        );
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS stockmaster (
            date TEXT NOT NULL,
            stock_code TEXT NOT NULL,
            payload TEXT NOT NULL,
            imported_at TEXT NOT NULL,
            PRIMARY KEY (date, stock_code)
        );

        CREATE INDEX IF NOT EXISTS idx_stockmaster_date ON stockmaster(date DESC);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS stockmaster;
        "#,
    )?;
    Ok(())
}
