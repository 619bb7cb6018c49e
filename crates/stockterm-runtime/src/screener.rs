use stockterm_engine::{
    FilterState, RenderWindow, ScreenView, Selection, SelectionError, SortField, SortState,
    VirtualRow,
};
use stockterm_types::{Snapshot, StockCode, StockRecord};

use crate::config::ViewConfig;
use crate::fetch::{FetchOutcome, LoadState};
use crate::{Error, Result};

/// What the main pane should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenStatus {
    /// Nothing loaded yet and a fetch is outstanding
    Loading,
    /// Nothing loaded and the last fetch failed
    Failed(String),
    /// A snapshot is loaded but holds no records
    NoData,
    /// Records exist but none pass the filters
    NoMatches,
    Ready,
}

/// One interactive screening session.
///
/// Every mutation recomputes view, then selection, then window, in that
/// order, and keeps the focused row on screen.
#[derive(Debug, Clone)]
pub struct Screener {
    snapshot: Snapshot,
    loaded: bool,
    in_flight: bool,
    load: LoadState,
    filter: FilterState,
    sort: SortState,
    view: ScreenView,
    selection: Selection,
    window: RenderWindow,
}

impl Screener {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            snapshot: Snapshot::empty(),
            loaded: false,
            in_flight: false,
            load: LoadState::Loading,
            filter: FilterState::default(),
            sort: config.initial_sort(),
            view: ScreenView::default(),
            selection: Selection::None,
            window: RenderWindow::new(config.row_extent, config.overscan),
        }
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self.recompute();
        self
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self.recompute();
        self
    }

    // --- fetch lifecycle ---

    /// Mark a fetch as outstanding. Refused while one already is.
    pub fn begin_fetch(&mut self) -> Result<()> {
        if self.in_flight {
            return Err(Error::FetchInFlight);
        }
        self.in_flight = true;
        self.load = LoadState::Loading;
        Ok(())
    }

    /// Apply a finished fetch. Success replaces the snapshot wholesale;
    /// failure keeps the previous one.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) {
        self.in_flight = false;
        match outcome {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.loaded = true;
                self.load = LoadState::Ready;
                self.recompute();
            }
            Err(reason) => {
                self.load = LoadState::Failed(reason);
            }
        }
    }

    // --- filter / sort ---

    pub fn update_filter(&mut self, update: impl FnOnce(&mut FilterState)) {
        update(&mut self.filter);
        self.recompute();
    }

    /// Reset every filter; sort and focus rules are untouched.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.recompute();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.recompute();
    }

    // --- navigation ---

    pub fn move_down(&mut self) {
        self.selection.move_down(&self.view, &self.snapshot.records);
        self.reveal_focus();
    }

    pub fn move_up(&mut self) {
        self.selection.move_up(&self.view, &self.snapshot.records);
        self.reveal_focus();
    }

    pub fn page_down(&mut self) {
        let rows = self.window.page_rows() as isize;
        self.selection.move_by(&self.view, &self.snapshot.records, rows);
        self.reveal_focus();
    }

    pub fn page_up(&mut self) {
        let rows = self.window.page_rows() as isize;
        self.selection.move_by(&self.view, &self.snapshot.records, -rows);
        self.reveal_focus();
    }

    pub fn move_first(&mut self) {
        self.selection.move_first(&self.view, &self.snapshot.records);
        self.reveal_focus();
    }

    pub fn move_last(&mut self) {
        self.selection.move_last(&self.view, &self.snapshot.records);
        self.reveal_focus();
    }

    pub fn select(&mut self, code: &StockCode) -> std::result::Result<(), SelectionError> {
        self.selection.select(&self.view, &self.snapshot.records, code)?;
        self.reveal_focus();
        Ok(())
    }

    pub fn select_at(&mut self, index: usize) -> std::result::Result<(), SelectionError> {
        self.selection.select_at(&self.view, &self.snapshot.records, index)?;
        self.reveal_focus();
        Ok(())
    }

    /// Enter on the table: the focused record, if any.
    pub fn confirm(&self) -> Option<&StockRecord> {
        self.focused_record()
    }

    // --- window ---

    /// Free scrolling (wheel). Focus is not moved.
    pub fn scroll_by(&mut self, delta: isize) {
        self.window.scroll_by(delta);
    }

    pub fn set_viewport(&mut self, viewport: usize) {
        if viewport != self.window.viewport() {
            self.window.set_viewport(viewport);
            self.reveal_focus();
        }
    }

    // --- queries ---

    pub fn focused_record(&self) -> Option<&StockRecord> {
        self.selection
            .index()
            .and_then(|i| self.view.get(&self.snapshot.records, i))
    }

    /// Materialized rows of the render window with their records.
    pub fn visible_rows(&self) -> Vec<(VirtualRow, &StockRecord)> {
        self.window
            .rows()
            .filter_map(|row| {
                self.view
                    .get(&self.snapshot.records, row.index)
                    .map(|record| (row, record))
            })
            .collect()
    }

    /// View rows as records, in order.
    pub fn rows(&self) -> impl Iterator<Item = &StockRecord> {
        self.view.records(&self.snapshot.records)
    }

    pub fn status(&self) -> ScreenStatus {
        if !self.loaded {
            return match &self.load {
                LoadState::Failed(reason) => ScreenStatus::Failed(reason.clone()),
                _ => ScreenStatus::Loading,
            };
        }
        if self.snapshot.is_empty() {
            ScreenStatus::NoData
        } else if self.view.is_empty() {
            ScreenStatus::NoMatches
        } else {
            ScreenStatus::Ready
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn view(&self) -> &ScreenView {
        &self.view
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn window(&self) -> &RenderWindow {
        &self.window
    }

    fn recompute(&mut self) {
        self.view = ScreenView::derive(&self.snapshot.records, &self.filter, self.sort);
        self.selection.sync(&self.view, &self.snapshot.records);
        self.window.set_len(self.view.len());
        self.reveal_focus();
    }

    fn reveal_focus(&mut self) {
        if let Some(index) = self.selection.index() {
            self.window.scroll_to_index(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockterm_engine::{Preset, SortDirection};
    use stockterm_types::Action;

    fn record(code: &str, sector: &str, score: f64, action: Action) -> StockRecord {
        let mut r = StockRecord::new(code);
        r.sector = Some(sector.to_string());
        r.score = Some(score);
        r.action = Some(action);
        r
    }

    fn loaded(records: Vec<StockRecord>) -> Screener {
        let mut screener = Screener::new(&ViewConfig::default());
        screener.complete_fetch(Ok(Snapshot::new(Some("2025-01-10".to_string()), records)));
        screener
    }

    #[test]
    fn test_status_progression() {
        let mut screener = Screener::new(&ViewConfig::default());
        assert_eq!(screener.status(), ScreenStatus::Loading);

        screener.complete_fetch(Err("timeout".to_string()));
        assert_eq!(screener.status(), ScreenStatus::Failed("timeout".to_string()));

        screener.begin_fetch().unwrap();
        screener.complete_fetch(Ok(Snapshot::empty()));
        assert_eq!(screener.status(), ScreenStatus::NoData);
        assert!(screener.selection().is_none());
    }

    #[test]
    fn test_load_focuses_first_row() {
        let screener = loaded(vec![
            record("AAA", "Energy", 90.0, Action::Buy),
            record("BBB", "Financials", 70.0, Action::Hold),
        ]);
        assert_eq!(screener.status(), ScreenStatus::Ready);
        assert_eq!(screener.focused_record().map(|r| r.code.as_str()), Some("AAA"));
    }

    #[test]
    fn test_failed_refresh_keeps_snapshot() {
        let mut screener = loaded(vec![record("AAA", "Energy", 90.0, Action::Buy)]);
        screener.begin_fetch().unwrap();
        assert!(matches!(screener.begin_fetch(), Err(Error::FetchInFlight)));

        screener.complete_fetch(Err("store offline".to_string()));
        assert_eq!(screener.status(), ScreenStatus::Ready);
        assert_eq!(screener.snapshot().len(), 1);
        assert_eq!(screener.load_state(), &LoadState::Failed("store offline".to_string()));
    }

    #[test]
    fn test_filtered_out_focus_falls_back() {
        let mut screener = loaded(vec![
            record("AAA", "Energy", 90.0, Action::Buy),
            record("BBB", "Financials", 70.0, Action::Hold),
            record("CCC", "Energy", 85.0, Action::Buy),
        ]);
        screener.move_down();
        assert_eq!(screener.selection().index(), Some(1));

        screener.update_filter(|f| f.toggle_sector("Energy"));
        assert_eq!(
            screener.selection(),
            &Selection::Focused { code: "AAA".into(), index: 0 }
        );

        screener.update_filter(|f| f.set_search("zzz"));
        assert_eq!(screener.status(), ScreenStatus::NoMatches);
        assert!(screener.selection().is_none());

        screener.clear_filters();
        assert_eq!(screener.view().len(), 3);
        assert_eq!(screener.selection().index(), Some(0));
    }

    #[test]
    fn test_sort_toggle_keeps_focus_on_same_record() {
        let mut screener = loaded(vec![
            record("AAA", "Energy", 90.0, Action::Buy),
            record("BBB", "Financials", 70.0, Action::Hold),
            record("CCC", "Energy", 85.0, Action::Buy),
        ]);
        screener.select(&"BBB".into()).unwrap();

        screener.toggle_sort(SortField::Score);
        assert_eq!(screener.sort(), SortState::by(SortField::Score, SortDirection::Desc));
        assert_eq!(screener.selection().index(), Some(2));

        screener.toggle_sort(SortField::Score);
        assert_eq!(screener.selection().index(), Some(0));
    }

    #[test]
    fn test_preset_and_action_filters() {
        let mut screener = loaded(vec![
            record("AAA", "Energy", 90.0, Action::Buy),
            record("BBB", "Financials", 70.0, Action::Hold),
            record("CCC", "Energy", 85.0, Action::Buy),
        ]);
        screener.update_filter(|f| f.toggle_preset(Preset::StrongBuy));
        assert_eq!(screener.view().len(), 2);
        screener.update_filter(|f| f.toggle_action(Action::Hold));
        assert_eq!(screener.status(), ScreenStatus::NoMatches);
        screener.update_filter(|f| f.toggle_preset(Preset::StrongBuy));
        assert_eq!(screener.rows().map(|r| r.code.as_str()).collect::<Vec<_>>(), vec!["BBB"]);
    }

    #[test]
    fn test_window_follows_focus() {
        let records = (0..500)
            .map(|i| record(&format!("S{:03}", i), "Energy", i as f64 % 100.0, Action::Hold))
            .collect();
        let mut screener = loaded(records);
        screener.set_viewport(10);

        screener.move_last();
        assert_eq!(screener.selection().index(), Some(499));
        assert_eq!(screener.window().scroll_offset(), 490);

        screener.page_up();
        assert_eq!(screener.selection().index(), Some(489));

        screener.move_first();
        assert_eq!(screener.window().scroll_offset(), 0);

        let rows = screener.visible_rows();
        assert_eq!(rows.len(), 31);
        assert_eq!(rows[0].1.code.as_str(), "S000");

        screener.scroll_by(100);
        assert_eq!(screener.window().scroll_offset(), 100);
        assert_eq!(screener.selection().index(), Some(0));

        assert!(screener.select_at(250).is_ok());
        assert!(screener.select_at(500).is_err());
        assert_eq!(screener.confirm().map(|r| r.code.as_str()), Some("S250"));
    }
}
