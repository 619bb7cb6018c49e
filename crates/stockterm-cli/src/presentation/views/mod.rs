//! Console views (`fmt::Display`) and TUI widgets over view models.
//!
//! Views own layout, color and number formatting; they never compute.

pub mod catalog;
pub mod detail;
pub mod stock;
pub mod tui;
pub mod workspace;

use owo_colors::OwoColorize;
use stockterm_runtime::DisplayConfig;

use crate::presentation::formatters::{
    format_currency, format_number, format_percent_detail,
};
use crate::presentation::view_models::{MetricValue, Tone};

/// Rendering environment of one console command.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub display: DisplayConfig,
    pub color: bool,
    /// Terminal width in columns, when stdout is a terminal
    pub width: Option<usize>,
}

impl ViewContext {
    pub fn new(display: DisplayConfig, color: bool, width: Option<usize>) -> Self {
        Self {
            display,
            color,
            width,
        }
    }

    /// Plain output: no color, default width.
    pub fn plain(display: DisplayConfig) -> Self {
        Self::new(display, false, None)
    }

    /// Color `text` by tone. Pad before painting; escape codes break widths.
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Neutral => text.to_string(),
            Tone::Positive => text.green().to_string(),
            Tone::Negative => text.red().to_string(),
            Tone::Caution => text.yellow().to_string(),
            Tone::Accent => text.cyan().to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Display text of a detail metric.
pub fn metric_text(value: &MetricValue, display: &DisplayConfig) -> String {
    match value {
        MetricValue::Number { value, decimals } => format_number(*value, *decimals),
        MetricValue::Percent { value } => format_percent_detail(*value),
        MetricValue::Currency { value } => format_currency(*value, display),
        MetricValue::Text { value } => value.clone().unwrap_or_else(|| "-".to_string()),
    }
}

/// CSV cell of an optional number: empty when missing.
pub(crate) fn csv_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
