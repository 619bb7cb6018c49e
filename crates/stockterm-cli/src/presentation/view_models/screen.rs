use serde::Serialize;

use super::common::{StatusLevel, Tone};
use super::detail::StockDetailViewModel;
use super::stock::StockRowViewModel;

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFocus {
    #[default]
    Table,
    Search,
    Picker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerKind {
    Sector,
    SubSector,
    Tag,
}

/// One frame of the interactive screen.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub top_bar: TopBarViewModel,
    pub table: TableViewModel,
    pub detail: Option<StockDetailViewModel>,
    pub status_bar: StatusBarViewModel,
    pub picker: Option<PickerViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopBarViewModel {
    pub date: Option<String>,
    pub search: String,
    pub search_focused: bool,
    pub sector: Option<String>,
    pub sub_sector: Option<String>,
    pub tag: Option<String>,
    pub actions: Vec<ToggleEntry>,
    pub presets: Vec<ToggleEntry>,
    pub matched: usize,
    pub total: usize,
    pub filters_active: bool,
    pub fetching: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleEntry {
    pub key: char,
    pub label: String,
    pub active: bool,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableViewModel {
    pub columns: Vec<ColumnHeader>,
    pub body: TableBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeader {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_arrow: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TableBody {
    Loading,
    Failed { reason: String },
    NoData,
    NoMatches,
    Rows { rows: Vec<TableRow> },
}

/// A materialized row of the render window.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    /// Position in the screened view
    pub index: usize,
    /// Line offset from the top of the viewport; `None` for overscan rows
    pub line: Option<usize>,
    pub focused: bool,
    pub stock: StockRowViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub level: StatusLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub focus: InputFocus,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickerViewModel {
    pub kind: PickerKind,
    pub title: &'static str,
    pub options: Vec<PickerOption>,
    pub cursor: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickerOption {
    pub label: String,
    /// `None` is the "all" entry that clears the selection
    pub value: Option<String>,
    pub selected: bool,
}
