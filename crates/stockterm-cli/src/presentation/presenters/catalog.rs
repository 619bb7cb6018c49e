use std::path::Path;

use stockterm_engine::Preset;
use stockterm_store::DateSummary;
use stockterm_types::Snapshot;

use crate::presentation::view_models::{
    CommandResultViewModel, DateEntry, DateListViewModel, Guidance, PresetEntry,
    PresetListViewModel, StatusBadge, VocabularyViewModel,
};

pub fn present_vocabulary(
    snapshot: &Snapshot,
    sector: Option<&str>,
) -> CommandResultViewModel<VocabularyViewModel> {
    let sub_sectors = match sector {
        Some(sector) => snapshot.sub_sectors_of(sector),
        None => snapshot.vocab.sub_sectors.clone(),
    };

    let content = VocabularyViewModel {
        date: snapshot.date.clone(),
        sector_filter: sector.map(str::to_string),
        sectors: snapshot.vocab.sectors.clone(),
        sub_sectors,
        tags: snapshot.vocab.tags.clone(),
    };

    let mut result = CommandResultViewModel::new(content);
    if snapshot.is_empty() {
        result = result.with_badge(StatusBadge::warning("Snapshot holds no records"));
    }
    result
}

/// Toggle key of a preset on the interactive screen.
pub(crate) fn preset_key(preset: Preset) -> char {
    let position = Preset::ALL.iter().position(|p| *p == preset).unwrap_or(0);
    char::from(b'1' + position as u8)
}

pub fn present_presets() -> CommandResultViewModel<PresetListViewModel> {
    let presets = Preset::ALL
        .into_iter()
        .map(|preset| PresetEntry {
            id: preset.id(),
            label: preset.label(),
            rule: preset.description(),
            key: preset_key(preset),
        })
        .collect();

    CommandResultViewModel::new(PresetListViewModel { presets }).with_suggestion(
        Guidance::new("Screen with a preset").with_command("stockterm list --preset value"),
    )
}

pub fn present_dates(
    database: &Path,
    dates: Vec<DateSummary>,
) -> CommandResultViewModel<DateListViewModel> {
    let entries = date_entries(dates);
    let empty = entries.is_empty();

    let mut result = CommandResultViewModel::new(DateListViewModel {
        database: database.display().to_string(),
        dates: entries,
    });
    if empty {
        result = result
            .with_badge(StatusBadge::warning("No snapshots stored"))
            .with_suggestion(
                Guidance::new("Load an export").with_command("stockterm import <export.json>"),
            );
    }
    result
}

/// Newest first; the first entry is the live snapshot.
pub(crate) fn date_entries(dates: Vec<DateSummary>) -> Vec<DateEntry> {
    dates
        .into_iter()
        .enumerate()
        .map(|(i, summary)| DateEntry {
            date: summary.date,
            records: summary.records,
            latest: i == 0,
        })
        .collect()
}
