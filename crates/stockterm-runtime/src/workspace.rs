use std::path::{Path, PathBuf};

use crate::config::{Config, resolve_workspace_path};
use crate::Result;

/// The on-disk home of one stockterm installation: config, store and log.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
    database_override: Option<PathBuf>,
}

impl Workspace {
    /// Resolve the workspace directory and load its config (defaults when
    /// the file is missing). Nothing is created on disk.
    pub fn resolve(explicit_path: Option<&str>) -> Result<Self> {
        let root = resolve_workspace_path(explicit_path)?;
        Self::open(root)
    }

    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = Config::load_from(&root.join("config.toml"))?;
        tracing::debug!(root = %root.display(), "resolved workspace");
        Ok(Self {
            root,
            config,
            database_override: None,
        })
    }

    /// Use `path` as the database regardless of the config file.
    pub fn with_database(mut self, path: Option<PathBuf>) -> Self {
        self.database_override = path;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_override
            .clone()
            .unwrap_or_else(|| self.config.database_path(&self.root))
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("stockterm.log")
    }

    /// Write the default config unless one already exists. Returns whether
    /// a file was written.
    pub fn init_config(&self) -> Result<bool> {
        let path = self.config_path();
        if path.exists() {
            return Ok(false);
        }
        Config::default().save_to(&path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_live_under_root() -> Result<()> {
        let dir = TempDir::new()?;
        let ws = Workspace::open(dir.path())?;
        assert_eq!(ws.config_path(), dir.path().join("config.toml"));
        assert_eq!(ws.database_path(), dir.path().join("stockterm.db"));
        assert_eq!(ws.log_path(), dir.path().join("stockterm.log"));
        Ok(())
    }

    #[test]
    fn test_database_override() -> Result<()> {
        let dir = TempDir::new()?;
        let ws = Workspace::open(dir.path())?.with_database(Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(ws.database_path(), PathBuf::from("/tmp/x.db"));
        Ok(())
    }

    #[test]
    fn test_init_config_once() -> Result<()> {
        let dir = TempDir::new()?;
        let ws = Workspace::open(dir.path())?;
        assert!(ws.init_config()?);
        assert!(!ws.init_config()?);
        assert_eq!(Config::load_from(&ws.config_path())?, Config::default());
        Ok(())
    }
}
