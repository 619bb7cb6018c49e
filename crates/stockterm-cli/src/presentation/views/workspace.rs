use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, ImportViewModel,
};

use super::ViewContext;

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self, ctx })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    ctx: &'a ViewContext,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        writeln!(f, "Workspace: {}", data.workspace)?;
        writeln!(
            f,
            "Config:    {}{}",
            data.config_path,
            if data.config_exists { "" } else { " (not found, using defaults)" }
        )?;
        writeln!(f, "Database:  {}", data.database)?;
        writeln!(f, "Log file:  {}", data.log_file)?;
        writeln!(f)?;

        let rendered = toml::to_string_pretty(&data.config).map_err(|_| fmt::Error)?;
        for line in rendered.lines() {
            if line.starts_with('[') {
                writeln!(f, "{}", self.ctx.bold(line))?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config: {}", self.data.config_path)
    }
}

impl CreateView for ImportViewModel {
    fn create_view<'a>(&'a self, _ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a> {
        Box::new(ImportView { data: self })
    }
}

struct ImportView<'a> {
    data: &'a ImportViewModel,
}

impl<'a> fmt::Display for ImportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source:   {}", self.data.source)?;
        writeln!(f, "Database: {}", self.data.database)?;
        if !self.data.dates.is_empty() {
            writeln!(f)?;
            writeln!(f, "{:<12} {:>8}", "DATE", "RECORDS")?;
            for entry in &self.data.dates {
                writeln!(f, "{:<12} {:>8}", entry.date, entry.records)?;
            }
        }
        Ok(())
    }
}
