//! TUI View Components
//!
//! Ratatui widgets for the interactive screen. Each is a thin wrapper
//! around a view model; colors are mapped here and nowhere else.

pub mod detail;
pub mod picker;
pub mod status_bar;
pub mod table;
pub mod top_bar;

pub use detail::DetailView;
pub use picker::PickerView;
pub use status_bar::StatusBarView;
pub use table::TableView;
pub use top_bar::TopBarView;

use ratatui::style::Color;

use crate::presentation::view_models::{StatusLevel, Tone};

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn tone_to_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::Reset,
        Tone::Positive => Color::Green,
        Tone::Negative => Color::Red,
        Tone::Caution => Color::Yellow,
        Tone::Accent => Color::Cyan,
    }
}
