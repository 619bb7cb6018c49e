use clap::Args;

use stockterm_engine::{FilterState, Preset, ScoreRange, SortDirection, SortField, SortState};
use stockterm_engine::filter::{SCORE_MAX, SCORE_MIN};
use stockterm_types::Action;

/// Filter and sort flags shared by `screen` and `list`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of code or name
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long = "sector")]
    pub sectors: Vec<String>,

    #[arg(long = "sub-sector")]
    pub sub_sectors: Vec<String>,

    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// BUY, HOLD or AVOID (repeatable)
    #[arg(long = "action", value_parser = parse_action)]
    pub actions: Vec<Action>,

    /// strong-buy, value, income, low-risk, controlled or illiquid
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<Preset>,

    #[arg(long)]
    pub min_score: Option<f64>,

    #[arg(long)]
    pub max_score: Option<f64>,

    /// score, pbv, pe_ttm, roe, fcf_ttm, market_cap, free_float or dividend_yield
    #[arg(long, value_parser = parse_sort_field)]
    pub sort: Option<SortField>,

    /// Sort ascending (default is descending)
    #[arg(long)]
    pub asc: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> FilterState {
        let mut filter = FilterState::new();
        if let Some(search) = &self.search {
            filter.set_search(search.clone());
        }
        filter.set_sectors(self.sectors.iter().cloned().collect());
        filter.sub_sectors = self.sub_sectors.iter().cloned().collect();
        filter.tags = self.tags.iter().cloned().collect();
        filter.actions = self.actions.iter().copied().collect();
        filter.preset = self.preset;
        if self.min_score.is_some() || self.max_score.is_some() {
            filter.set_score_range(ScoreRange::new(
                self.min_score.unwrap_or(SCORE_MIN),
                self.max_score.unwrap_or(SCORE_MAX),
            ));
        }
        filter
    }

    /// The requested sort, falling back to `default` when `--sort` is absent.
    pub fn to_sort(&self, default: SortState) -> SortState {
        let direction = if self.asc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        match self.sort {
            Some(field) => SortState::by(field, direction),
            None if self.asc => SortState {
                direction,
                ..default
            },
            None => default,
        }
    }
}

fn parse_action(s: &str) -> Result<Action, String> {
    s.parse().map_err(|e: stockterm_types::Error| e.to_string())
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    s.parse()
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    s.parse()
}
