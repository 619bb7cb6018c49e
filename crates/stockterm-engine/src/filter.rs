use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use stockterm_types::Action;

use crate::preset::Preset;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Inclusive score bounds. The default `[0, 100]` means "not narrowed".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    /// Bounds are clamped to `[0, 100]` and swapped if given in reverse.
    pub fn new(min: f64, max: f64) -> Self {
        let min = min.clamp(SCORE_MIN, SCORE_MAX);
        let max = max.clamp(SCORE_MIN, SCORE_MAX);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }

    pub fn is_default(&self) -> bool {
        self.min <= SCORE_MIN && self.max >= SCORE_MAX
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: SCORE_MIN,
            max: SCORE_MAX,
        }
    }
}

/// User-owned narrowing criteria. Never persisted across sessions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub sectors: BTreeSet<String>,
    pub sub_sectors: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub actions: BTreeSet<Action>,
    pub score_range: ScoreRange,
    pub preset: Option<Preset>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Replace the sector selection. Sub-sectors are cleared whenever the
    /// sector selection actually changes.
    pub fn set_sectors(&mut self, sectors: BTreeSet<String>) {
        if sectors != self.sectors {
            self.sub_sectors.clear();
        }
        self.sectors = sectors;
    }

    pub fn toggle_sector(&mut self, sector: &str) {
        let mut sectors = self.sectors.clone();
        if !sectors.remove(sector) {
            sectors.insert(sector.to_string());
        }
        self.set_sectors(sectors);
    }

    pub fn toggle_sub_sector(&mut self, sub_sector: &str) {
        toggle(&mut self.sub_sectors, sub_sector.to_string());
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag.to_string());
    }

    pub fn toggle_action(&mut self, action: Action) {
        toggle(&mut self.actions, action);
    }

    /// Radio button with an off state: the active preset toggles off.
    pub fn toggle_preset(&mut self, preset: Preset) {
        self.preset = if self.preset == Some(preset) {
            None
        } else {
            Some(preset)
        };
    }

    pub fn set_score_range(&mut self, range: ScoreRange) {
        self.score_range = range;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.set_search(query);
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sectors.insert(sector.into());
        self
    }

    pub fn with_sub_sector(mut self, sub_sector: impl Into<String>) -> Self {
        self.sub_sectors.insert(sub_sector.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.insert(action);
        self
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn with_score_range(mut self, range: ScoreRange) -> Self {
        self.score_range = range;
        self
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if set.contains(&value) {
        set.remove(&value);
    } else {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changing_sector_clears_sub_sectors() {
        let mut filter = FilterState::new().with_sector("Financials").with_sub_sector("Banks");
        filter.toggle_sector("Energy");
        assert!(filter.sub_sectors.is_empty());
        assert_eq!(filter.sectors.len(), 2);
    }

    #[test]
    fn test_same_sector_selection_keeps_sub_sectors() {
        let mut filter = FilterState::new().with_sector("Financials").with_sub_sector("Banks");
        let same = filter.sectors.clone();
        filter.set_sectors(same);
        assert_eq!(filter.sub_sectors.len(), 1);
    }

    #[test]
    fn test_toggle_preset_is_radio_with_off() {
        let mut filter = FilterState::new();
        filter.toggle_preset(Preset::Value);
        assert_eq!(filter.preset, Some(Preset::Value));
        filter.toggle_preset(Preset::Income);
        assert_eq!(filter.preset, Some(Preset::Income));
        filter.toggle_preset(Preset::Income);
        assert_eq!(filter.preset, None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = FilterState::new()
            .with_search("bank")
            .with_action(Action::Buy)
            .with_tag("bluechip")
            .with_score_range(ScoreRange::new(40.0, 90.0));
        assert!(filter.is_active());
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_score_range_normalizes() {
        let range = ScoreRange::new(120.0, -5.0);
        assert_eq!(range, ScoreRange::default());
        assert!(range.is_default());

        let narrowed = ScoreRange::new(90.0, 60.0);
        assert_eq!((narrowed.min, narrowed.max), (60.0, 90.0));
        assert!(!narrowed.is_default());
    }

    #[test]
    fn test_toggle_action_twice_restores() {
        let mut filter = FilterState::new();
        filter.toggle_action(Action::Hold);
        filter.toggle_action(Action::Hold);
        assert!(filter.actions.is_empty());
    }
}
