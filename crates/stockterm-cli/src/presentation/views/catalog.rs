use std::fmt;

use crate::presentation::view_models::{
    CreateView, CsvTable, DateListViewModel, PresetListViewModel, Tone, VocabularyViewModel,
};

use super::ViewContext;

// --------------------------------------------------------
// Vocabulary View
// --------------------------------------------------------

impl CreateView for VocabularyViewModel {
    fn create_view<'a>(&'a self, ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a> {
        Box::new(VocabularyView { data: self, ctx })
    }
}

struct VocabularyView<'a> {
    data: &'a VocabularyViewModel,
    ctx: &'a ViewContext,
}

impl<'a> VocabularyView<'a> {
    fn list(&self, f: &mut fmt::Formatter<'_>, title: &str, values: &[String]) -> fmt::Result {
        writeln!(f, "{} ({})", self.ctx.bold(title), values.len())?;
        if values.is_empty() {
            writeln!(f, "  -")?;
        }
        for value in values {
            writeln!(f, "  {}", value)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for VocabularyView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list(f, "Sectors", &self.data.sectors)?;
        writeln!(f)?;
        match &self.data.sector_filter {
            Some(sector) => {
                self.list(f, &format!("Sub Sectors of {}", sector), &self.data.sub_sectors)?
            }
            None => self.list(f, "Sub Sectors", &self.data.sub_sectors)?,
        }
        writeln!(f)?;
        self.list(f, "Tags", &self.data.tags)
    }
}

// --------------------------------------------------------
// Preset List View
// --------------------------------------------------------

impl CreateView for PresetListViewModel {
    fn create_view<'a>(&'a self, ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a> {
        Box::new(PresetListView { data: self, ctx })
    }
}

struct PresetListView<'a> {
    data: &'a PresetListViewModel,
    ctx: &'a ViewContext,
}

impl<'a> fmt::Display for PresetListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<4} {:<12} {:<12} RULE", "KEY", "ID", "LABEL")?;
        writeln!(f, "{}", "-".repeat(44))?;
        for preset in &self.data.presets {
            writeln!(
                f,
                "{:<4} {} {:<12} {}",
                preset.key,
                self.ctx.paint(&format!("{:<12}", preset.id), Tone::Accent),
                preset.label,
                preset.rule
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Date List View
// --------------------------------------------------------

impl CreateView for DateListViewModel {
    fn create_view<'a>(&'a self, ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a> {
        Box::new(DateListView { data: self, ctx })
    }

    fn to_csv(&self) -> Option<CsvTable> {
        Some(CsvTable {
            headers: vec!["date", "records", "latest"],
            rows: self
                .dates
                .iter()
                .map(|d| vec![d.date.clone(), d.records.to_string(), d.latest.to_string()])
                .collect(),
        })
    }
}

struct DateListView<'a> {
    data: &'a DateListViewModel,
    ctx: &'a ViewContext,
}

impl<'a> fmt::Display for DateListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Store: {}", self.data.database)?;
        if self.data.dates.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{:<12} {:>8}", "DATE", "RECORDS")?;
        for entry in &self.data.dates {
            let marker = if entry.latest {
                self.ctx.paint("  (live)", Tone::Positive)
            } else {
                String::new()
            };
            writeln!(f, "{:<12} {:>8}{}", entry.date, entry.records, marker)?;
        }
        Ok(())
    }
}
