use std::path::Path;

use stockterm_runtime::Workspace;
use stockterm_store::DateSummary;

use super::catalog::date_entries;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, ImportViewModel,
    StatusBadge,
};

pub fn present_config(workspace: &Workspace) -> CommandResultViewModel<ConfigViewModel> {
    let config_path = workspace.config_path();
    let config_exists = config_path.exists();

    let content = ConfigViewModel {
        workspace: workspace.root().display().to_string(),
        config_path: config_path.display().to_string(),
        config_exists,
        database: workspace.database_path().display().to_string(),
        log_file: workspace.log_path().display().to_string(),
        config: workspace.config().clone(),
    };

    let mut result = CommandResultViewModel::new(content);
    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Write the defaults to edit them").with_command("stockterm config init"),
        );
    }
    result
}

pub fn present_config_init(path: &Path, written: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let badge = if written {
        StatusBadge::success("Wrote default config")
    } else {
        StatusBadge::info("Config already exists; left unchanged")
    };
    CommandResultViewModel::new(ConfigInitViewModel {
        config_path: path.display().to_string(),
        written,
    })
    .with_badge(badge)
}

pub fn present_import(
    source: &Path,
    database: &Path,
    imported: usize,
    dates: Vec<DateSummary>,
) -> CommandResultViewModel<ImportViewModel> {
    let content = ImportViewModel {
        source: source.display().to_string(),
        database: database.display().to_string(),
        imported,
        dates: date_entries(dates),
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("Imported {} records", imported)))
        .with_suggestion(Guidance::new("Open the screen").with_command("stockterm screen"))
}
