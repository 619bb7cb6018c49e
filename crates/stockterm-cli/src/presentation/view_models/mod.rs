pub mod catalog;
pub mod common;
pub mod detail;
pub mod result;
pub mod screen;
pub mod stock;
pub mod workspace;

pub use catalog::{DateEntry, DateListViewModel, PresetEntry, PresetListViewModel, VocabularyViewModel};
pub use common::{Guidance, ScoreTier, StatusBadge, StatusLevel, Tone};
pub use detail::{
    MetricRow, MetricSection, MetricValue, ShareholderEntry, StockDetailViewModel,
    UnderwriterEntry, WarningBadge,
};
pub use result::CommandResultViewModel;
pub use screen::{
    ColumnHeader, InputFocus, PickerKind, PickerOption, PickerViewModel, ScreenViewModel,
    StatusBarViewModel, TableBody, TableRow, TableViewModel, ToggleEntry, TopBarViewModel,
};
pub use stock::{FilterSummary, SortSummary, StockListViewModel, StockRowViewModel};
pub use workspace::{ConfigInitViewModel, ConfigViewModel, ImportViewModel};

use std::fmt;

use crate::presentation::views::ViewContext;

/// Bridges a view model to its console view.
pub trait CreateView {
    fn create_view<'a>(&'a self, ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a>;

    /// Tabular form for `--format csv`; `None` when the data is not a table.
    fn to_csv(&self) -> Option<CsvTable> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}
