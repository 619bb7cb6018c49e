use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use stockterm_engine::{SortDirection, SortField, SortState};

pub const WORKSPACE_ENV: &str = "STOCKTERM_PATH";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. STOCKTERM_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.stockterm (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(WORKSPACE_ENV)
        && !env_path.trim().is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("stockterm"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".stockterm"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Snapshot database; relative paths resolve against the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub row_extent: usize,
    pub overscan: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortField>,
    pub default_direction: SortDirection,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            row_extent: 1,
            overscan: 20,
            default_sort: None,
            default_direction: SortDirection::Desc,
        }
    }
}

impl ViewConfig {
    pub fn initial_sort(&self) -> SortState {
        SortState {
            field: self.default_sort,
            direction: self.default_direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_prefix: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_prefix: "Rp".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Database path, resolved against `workspace` when relative.
    pub fn database_path(&self, workspace: &Path) -> PathBuf {
        match &self.store.database {
            Some(path) => {
                let expanded = expand_tilde(&path.to_string_lossy());
                if expanded.is_absolute() {
                    expanded
                } else {
                    workspace.join(expanded)
                }
            }
            None => workspace.join("stockterm.db"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.view.row_extent, 1);
        assert_eq!(config.view.overscan, 20);
        assert_eq!(config.display.currency_prefix, "Rp");
        assert_eq!(config.view.initial_sort(), SortState::default());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.view.default_sort = Some(SortField::MarketCap);
        config.view.default_direction = SortDirection::Asc;
        config.store.database = Some(PathBuf::from("snapshots.db"));

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.view.initial_sort(),
            SortState::by(SortField::MarketCap, SortDirection::Asc)
        );

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[view]\noverscan = 5\ndefault_sort = \"score\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.view.overscan, 5);
        assert_eq!(config.view.row_extent, 1);
        assert_eq!(config.view.default_sort, Some(SortField::Score));
        assert_eq!(config.display, DisplayConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[view]\ndefault_sort = \"price\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_database_path_resolution() {
        let workspace = Path::new("/data/stockterm");
        let mut config = Config::default();
        assert_eq!(config.database_path(workspace), workspace.join("stockterm.db"));

        config.store.database = Some(PathBuf::from("other.db"));
        assert_eq!(config.database_path(workspace), workspace.join("other.db"));

        config.store.database = Some(PathBuf::from("/var/lib/prices.db"));
        assert_eq!(config.database_path(workspace), PathBuf::from("/var/lib/prices.db"));
    }

    #[test]
    fn test_explicit_workspace_path_wins() -> Result<()> {
        assert_eq!(
            resolve_workspace_path(Some("/tmp/explicit"))?,
            PathBuf::from("/tmp/explicit")
        );
        Ok(())
    }
}
