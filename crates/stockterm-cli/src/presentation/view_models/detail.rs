use serde::Serialize;

use super::common::{ScoreTier, Tone};

/// Everything the detail pane and `show` display for one record.
#[derive(Debug, Clone, Serialize)]
pub struct StockDetailViewModel {
    pub code: String,
    pub name: String,
    pub sector: String,
    pub sub_sector: String,
    pub date: String,
    pub price: Option<f64>,
    pub change: Option<f64>,
    pub change_pct: Option<f64>,
    pub score: Option<f64>,
    pub score_tier: ScoreTier,
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningBadge>,
    pub sections: Vec<MetricSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_shareholders: Vec<ShareholderEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub underwriters: Vec<UnderwriterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningBadge {
    LowFreeFloat { free_float: f64 },
    Controlled,
    CashGenerative,
    DistressRisk,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricSection {
    pub title: &'static str,
    pub rows: Vec<MetricRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: MetricValue,
    #[serde(skip_serializing_if = "is_neutral")]
    pub tone: Tone,
}

impl MetricRow {
    pub fn new(label: &'static str, value: MetricValue) -> Self {
        Self {
            label,
            value,
            tone: Tone::Neutral,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

fn is_neutral(tone: &Tone) -> bool {
    *tone == Tone::Neutral
}

/// A raw value plus how it is meant to be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricValue {
    /// Magnitude-suffixed number
    Number { value: Option<f64>, decimals: usize },
    /// Ratio shown as a percentage
    Percent { value: Option<f64> },
    Currency { value: Option<f64> },
    Text { value: Option<String> },
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareholderEntry {
    pub name: String,
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnderwriterEntry {
    pub name: String,
    pub id: Option<String>,
}
