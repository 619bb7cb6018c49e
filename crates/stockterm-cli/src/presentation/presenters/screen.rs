use std::collections::BTreeSet;

use stockterm_engine::{FilterState, Preset, SortField};
use stockterm_runtime::{LoadState, ScreenStatus, Screener};
use stockterm_types::{Action, Snapshot};

use super::catalog::preset_key;
use super::detail::present_detail;
use super::stock::present_row;
use crate::presentation::formatters::labels::action_tone;
use crate::presentation::view_models::{
    ColumnHeader, InputFocus, PickerKind, PickerOption, PickerViewModel, ScreenViewModel,
    StatusBarViewModel, StatusLevel, TableBody, TableRow, TableViewModel, ToggleEntry, Tone,
    TopBarViewModel,
};

/// Table columns, left to right.
pub const COLUMNS: [&str; 19] = [
    "TICKER", "NAME", "SECTOR", "SUBSEC", "GROUP", "PRICE", "CHG%", "MCAP", "PBV", "PE", "ROE",
    "FCF", "DY%", "D/E", "FF%", "INTR", "SCR", "ACT", "TREND",
];

/// Per-frame UI state the session itself does not own.
#[derive(Debug, Clone, Copy)]
pub struct ScreenContext<'a> {
    pub focus: InputFocus,
    pub picker: Option<(PickerKind, usize)>,
    pub source: &'a str,
}

pub fn present_screen(screener: &Screener, ctx: ScreenContext<'_>) -> ScreenViewModel {
    ScreenViewModel {
        top_bar: present_top_bar(screener, ctx.focus),
        table: present_table(screener),
        detail: screener.focused_record().map(present_detail),
        status_bar: present_status_bar(screener, &ctx),
        picker: ctx.picker.map(|(kind, cursor)| {
            let options = picker_options(screener.snapshot(), screener.filter(), kind);
            PickerViewModel {
                kind,
                title: picker_title(kind),
                cursor: cursor.min(options.len().saturating_sub(1)),
                options,
            }
        }),
    }
}

fn present_top_bar(screener: &Screener, focus: InputFocus) -> TopBarViewModel {
    let filter = screener.filter();

    TopBarViewModel {
        date: screener.snapshot().date.clone(),
        search: filter.search.clone(),
        search_focused: focus == InputFocus::Search,
        sector: selection_label(&filter.sectors, "sectors"),
        sub_sector: selection_label(&filter.sub_sectors, "sub-sectors"),
        tag: selection_label(&filter.tags, "tags"),
        actions: Action::ALL
            .into_iter()
            .map(|action| ToggleEntry {
                key: action_key(action),
                label: action.as_str().to_string(),
                active: filter.actions.contains(&action),
                tone: action_tone(Some(action.as_str())),
            })
            .collect(),
        presets: Preset::ALL
            .into_iter()
            .map(|preset| ToggleEntry {
                key: preset_key(preset),
                label: preset.label().to_string(),
                active: filter.preset == Some(preset),
                tone: Tone::Accent,
            })
            .collect(),
        matched: screener.view().len(),
        total: screener.snapshot().len(),
        filters_active: filter.is_active(),
        fetching: screener.is_fetching(),
    }
}

pub(crate) fn action_key(action: Action) -> char {
    match action {
        Action::Buy => 'b',
        Action::Hold => 'h',
        Action::Avoid => 'x',
    }
}

/// `None` when nothing is selected, the value itself for one, a count otherwise.
fn selection_label(selected: &BTreeSet<String>, noun: &str) -> Option<String> {
    match selected.len() {
        0 => None,
        1 => selected.iter().next().cloned(),
        n => Some(format!("{} {}", n, noun)),
    }
}

fn present_table(screener: &Screener) -> TableViewModel {
    let sort = screener.sort();
    let columns = COLUMNS
        .iter()
        .map(|&label| ColumnHeader {
            label,
            sort_arrow: sort
                .field
                .filter(|field| field.column() == label)
                .map(|_| sort.direction.arrow()),
        })
        .collect();

    let body = match screener.status() {
        ScreenStatus::Loading => TableBody::Loading,
        ScreenStatus::Failed(reason) => TableBody::Failed { reason },
        ScreenStatus::NoData => TableBody::NoData,
        ScreenStatus::NoMatches => TableBody::NoMatches,
        ScreenStatus::Ready => {
            let visible = screener.window().visible();
            let focused = screener.selection().index();
            let rows = screener
                .visible_rows()
                .into_iter()
                .map(|(row, record)| TableRow {
                    index: row.index,
                    line: visible
                        .filter(|range| range.contains(row.index))
                        .map(|range| row.index - range.lo),
                    focused: focused == Some(row.index),
                    stock: present_row(record),
                })
                .collect();
            TableBody::Rows { rows }
        }
    };

    TableViewModel { columns, body }
}

fn present_status_bar(screener: &Screener, ctx: &ScreenContext<'_>) -> StatusBarViewModel {
    let (level, message) = match screener.status() {
        ScreenStatus::Loading => (
            StatusLevel::Info,
            format!("Loading snapshot from {}...", ctx.source),
        ),
        ScreenStatus::Failed(reason) => (StatusLevel::Error, reason),
        ScreenStatus::NoData => (StatusLevel::Warning, "Snapshot holds no records".to_string()),
        ScreenStatus::NoMatches => (
            StatusLevel::Warning,
            "No matching stocks - relax filters (Esc clears)".to_string(),
        ),
        ScreenStatus::Ready => match screener.load_state() {
            LoadState::Failed(reason) => (StatusLevel::Error, format!("Refresh failed: {}", reason)),
            _ if screener.is_fetching() => (StatusLevel::Info, "Refreshing...".to_string()),
            _ => (
                StatusLevel::Success,
                format!(
                    "Snapshot {} from {}",
                    screener.snapshot().date.as_deref().unwrap_or("-"),
                    ctx.source
                ),
            ),
        },
    };

    let sort = screener.sort();
    StatusBarViewModel {
        level,
        message,
        position: screener
            .selection()
            .index()
            .map(|i| (i + 1, screener.view().len())),
        sort: sort
            .field
            .map(|field: SortField| format!("{} {}", field.column(), sort.direction.arrow())),
        focus: ctx.focus,
    }
}

fn picker_title(kind: PickerKind) -> &'static str {
    match kind {
        PickerKind::Sector => "Sector",
        PickerKind::SubSector => "Sub Sector",
        PickerKind::Tag => "Tag",
    }
}

/// Options of a picker: the "all" entry first, then the vocabulary.
/// Sub-sectors narrow to the selected sectors when any are selected.
pub fn picker_options(snapshot: &Snapshot, filter: &FilterState, kind: PickerKind) -> Vec<PickerOption> {
    let (all_label, values, selected): (&str, Vec<String>, &BTreeSet<String>) = match kind {
        PickerKind::Sector => ("All Sectors", snapshot.vocab.sectors.clone(), &filter.sectors),
        PickerKind::SubSector => {
            let values = if filter.sectors.is_empty() {
                snapshot.vocab.sub_sectors.clone()
            } else {
                filter
                    .sectors
                    .iter()
                    .flat_map(|sector| snapshot.sub_sectors_of(sector))
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            };
            ("All Sub Sectors", values, &filter.sub_sectors)
        }
        PickerKind::Tag => ("All Tags", snapshot.vocab.tags.clone(), &filter.tags),
    };

    std::iter::once(PickerOption {
        label: all_label.to_string(),
        value: None,
        selected: selected.is_empty(),
    })
    .chain(values.into_iter().map(|value| PickerOption {
        label: value.clone(),
        selected: selected.contains(&value),
        value: Some(value),
    }))
    .collect()
}
