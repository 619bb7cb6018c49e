use serde::Serialize;

use super::common::ScoreTier;

/// One screened row, raw values only.
#[derive(Debug, Clone, Serialize)]
pub struct StockRowViewModel {
    pub code: String,
    pub name: String,
    pub sector: String,
    pub sub_sector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub price: Option<f64>,
    pub change: Option<f64>,
    /// Percent of the previous close, already scaled by 100.
    pub change_pct: Option<f64>,
    pub market_cap: Option<f64>,
    pub pbv: Option<f64>,
    pub pe_ttm: Option<f64>,
    pub roe: Option<f64>,
    pub fcf_ttm: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub free_float: Option<f64>,
    pub intrinsic_price: Option<f64>,
    pub score: Option<f64>,
    pub score_tier: ScoreTier,
    pub action: Option<String>,
    pub trend: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sectors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_sectors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_range: Option<(f64, f64)>,
}

impl FilterSummary {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.sectors.is_empty()
            && self.sub_sectors.is_empty()
            && self.tags.is_empty()
            && self.actions.is_empty()
            && self.preset.is_none()
            && self.score_range.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SortSummary {
    pub field: String,
    pub column: String,
    pub direction: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockListViewModel {
    pub date: Option<String>,
    pub total: usize,
    pub matched: usize,
    pub filters: FilterSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSummary>,
    pub rows: Vec<StockRowViewModel>,
}
