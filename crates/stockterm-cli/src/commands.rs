use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use stockterm_runtime::Workspace;
use stockterm_store::{JsonFileSource, SnapshotSource, SqliteSource};

use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use super::logging;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance(cli.data_dir.as_deref())?;
        return Ok(());
    };

    let workspace = Workspace::resolve(cli.data_dir.as_deref())?.with_database(cli.db);

    if matches!(command, Commands::Screen { .. }) {
        logging::init_file(cli.log_level, &workspace.log_path())?;
    } else {
        logging::init_console(cli.log_level);
    }

    let ctx = HandlerContext::new(cli.format, &workspace);

    match command {
        Commands::Screen { filter, source } => handlers::screen::handle(
            &workspace,
            snapshot_source(&workspace, source),
            filter.to_filter(),
            filter.to_sort(workspace.config().view.initial_sort()),
        ),

        Commands::List {
            filter,
            limit,
            source,
        } => handlers::list::handle(
            &ctx,
            snapshot_source(&workspace, source),
            filter.to_filter(),
            filter.to_sort(workspace.config().view.initial_sort()),
            limit,
        ),

        Commands::Show { code, source } => {
            handlers::show::handle(&ctx, snapshot_source(&workspace, source), &code)
        }

        Commands::Import { path, date } => {
            handlers::import::handle(&ctx, &workspace, &path, date.as_deref())
        }

        Commands::Dates => handlers::dates::handle(&ctx, &workspace),

        Commands::Vocab { sector, source } => handlers::vocab::handle(
            &ctx,
            snapshot_source(&workspace, source),
            sector.as_deref(),
        ),

        Commands::Presets => handlers::presets::handle(&ctx),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, &workspace),
            ConfigCommand::Init => handlers::config::init(&ctx, &workspace),
        },
    }
}

/// `--source` reads a JSON export directly; otherwise the workspace store.
fn snapshot_source(workspace: &Workspace, source: Option<PathBuf>) -> Arc<dyn SnapshotSource> {
    match source {
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => Arc::new(SqliteSource::new(workspace.database_path())),
    }
}

fn show_guidance(data_dir: Option<&str>) -> Result<()> {
    let workspace = Workspace::resolve(data_dir)?;
    let db_exists = workspace.database_path().exists();

    println!("stockterm - terminal stock screener\n");

    if !db_exists {
        println!("Get started:");
        println!("  stockterm import <export.json>    # Load a snapshot into the store");
        println!("  stockterm screen                  # Open the interactive screen\n");
        println!("Or screen an export without importing it:");
        println!("  stockterm screen --source <export.json>\n");
    } else {
        println!("Quick commands:");
        println!("  stockterm screen                  # Interactive screen");
        println!("  stockterm list --preset value     # Print a screened table");
        println!("  stockterm show <CODE>             # Full record of one stock");
        println!("  stockterm vocab                   # Sectors, sub-sectors and tags\n");
    }

    println!("For more commands:");
    println!("  stockterm --help");
    Ok(())
}
