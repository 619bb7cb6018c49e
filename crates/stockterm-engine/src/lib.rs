// Engine module - the screening core
// Snapshot records in, ordered view + focus + render window out. Pure and synchronous.

pub mod filter;
pub mod pipeline;
pub mod predicates;
pub mod preset;
pub mod selection;
pub mod sort;
pub mod window;

pub use filter::{FilterState, ScoreRange};
pub use pipeline::{apply, ScreenView};
pub use preset::Preset;
pub use selection::{Selection, SelectionError};
pub use sort::{SortDirection, SortField, SortState};
pub use window::{RenderWindow, VirtualRow, WindowRange};

use stockterm_types::StockRecord;

// Façade API - the host update loop calls this after every input change

/// Derive the ordered view for the current filter and sort over a snapshot
pub fn derive_view(records: &[StockRecord], filter: &FilterState, sort: SortState) -> ScreenView {
    ScreenView::derive(records, filter, sort)
}
