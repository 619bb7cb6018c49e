use stockterm_engine::{FilterState, ScreenView, SortDirection, SortState};
use stockterm_types::{Snapshot, StockRecord, finite};

use crate::presentation::formatters::labels::score_tier;
use crate::presentation::view_models::{
    CommandResultViewModel, FilterSummary, Guidance, SortSummary, StatusBadge,
    StockListViewModel, StockRowViewModel,
};

pub fn present_row(record: &StockRecord) -> StockRowViewModel {
    let change = record.price_change();
    StockRowViewModel {
        code: record.code.to_string(),
        name: record.name().to_string(),
        sector: record.sector().to_string(),
        sub_sector: record.sub_sector().to_string(),
        group: record.group.clone().filter(|g| !g.is_empty()),
        price: finite(record.price),
        change,
        change_pct: change_percent(change, record.previous_price),
        market_cap: finite(record.market_cap),
        pbv: finite(record.pbv),
        pe_ttm: finite(record.pe_ttm),
        roe: finite(record.roe),
        fcf_ttm: finite(record.fcf_ttm),
        dividend_yield: finite(record.dividend_yield),
        debt_to_equity: finite(record.debt_to_equity),
        free_float: finite(record.free_float),
        intrinsic_price: finite(record.intrinsic_price),
        score: finite(record.score),
        score_tier: score_tier(record.score),
        action: record.action.map(|a| a.as_str().to_string()),
        trend: record.shareholder_trend_latest.clone(),
    }
}

/// Change as a percent of the previous close; 0 without a usable previous.
pub(crate) fn change_percent(change: Option<f64>, previous: Option<f64>) -> Option<f64> {
    let change = change?;
    match finite(previous) {
        Some(p) if p > 0.0 => Some(change / p * 100.0),
        _ => Some(0.0),
    }
}

pub fn summarize_filter(filter: &FilterState) -> FilterSummary {
    let search = filter.search.trim();
    FilterSummary {
        search: (!search.is_empty()).then(|| search.to_string()),
        sectors: filter.sectors.iter().cloned().collect(),
        sub_sectors: filter.sub_sectors.iter().cloned().collect(),
        tags: filter.tags.iter().cloned().collect(),
        actions: filter.actions.iter().map(|a| a.as_str().to_string()).collect(),
        preset: filter.preset.map(|p| p.id().to_string()),
        score_range: (!filter.score_range.is_default())
            .then_some((filter.score_range.min, filter.score_range.max)),
    }
}

pub fn summarize_sort(sort: SortState) -> Option<SortSummary> {
    sort.field.map(|field| SortSummary {
        field: field.id().to_string(),
        column: field.column().to_string(),
        direction: match sort.direction {
            SortDirection::Asc => "asc".to_string(),
            SortDirection::Desc => "desc".to_string(),
        },
    })
}

pub fn present_stock_list(
    snapshot: &Snapshot,
    view: &ScreenView,
    filter: &FilterState,
    sort: SortState,
    limit: Option<usize>,
) -> CommandResultViewModel<StockListViewModel> {
    let rows: Vec<StockRowViewModel> = view
        .records(&snapshot.records)
        .take(limit.unwrap_or(usize::MAX))
        .map(present_row)
        .collect();
    let shown = rows.len();

    let content = StockListViewModel {
        date: snapshot.date.clone(),
        total: snapshot.len(),
        matched: view.len(),
        filters: summarize_filter(filter),
        sort: summarize_sort(sort),
        rows,
    };

    let mut result = CommandResultViewModel::new(content);

    if snapshot.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("Snapshot holds no records"))
            .with_suggestion(
                Guidance::new("Load an export into the store")
                    .with_command("stockterm import <export.json>"),
            );
    } else if view.is_empty() {
        result = result
            .with_badge(StatusBadge::info("No matching stocks"))
            .with_suggestion(Guidance::new("Relax filters"));
    } else if shown < view.len() {
        result = result.with_suggestion(
            Guidance::new(format!("Showing {} of {} matches", shown, view.len()))
                .with_command("--limit <N>"),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockterm_types::Action;

    fn record(code: &str, score: f64, action: Action) -> StockRecord {
        let mut r = StockRecord::new(code);
        r.score = Some(score);
        r.action = Some(action);
        r
    }

    #[test]
    fn test_change_percent() {
        assert_eq!(change_percent(Some(50.0), Some(1000.0)), Some(5.0));
        assert_eq!(change_percent(Some(50.0), Some(0.0)), Some(0.0));
        assert_eq!(change_percent(Some(50.0), None), Some(0.0));
        assert_eq!(change_percent(None, Some(1000.0)), None);
    }

    #[test]
    fn test_row_keeps_raw_values() {
        let mut r = record("BBCA", 85.0, Action::Buy);
        r.price = Some(9500.0);
        r.previous_price = Some(9400.0);
        r.roe = Some(f64::NAN);
        r.shareholder_trend_latest = Some("ACCUMULATION".to_string());

        let row = present_row(&r);
        assert_eq!(row.change, Some(100.0));
        assert_eq!(row.roe, None);
        assert_eq!(row.action.as_deref(), Some("BUY"));
        assert_eq!(row.score_tier, crate::presentation::view_models::ScoreTier::High);
        assert_eq!(row.group, None);
    }

    #[test]
    fn test_list_respects_limit_and_suggests() {
        let snapshot = Snapshot::new(
            Some("2025-01-10".to_string()),
            vec![
                record("AAA", 90.0, Action::Buy),
                record("BBB", 70.0, Action::Hold),
                record("CCC", 85.0, Action::Buy),
            ],
        );
        let filter = FilterState::default();
        let view = ScreenView::derive(&snapshot.records, &filter, SortState::default());

        let result = present_stock_list(&snapshot, &view, &filter, SortState::default(), Some(2));
        assert_eq!(result.content.rows.len(), 2);
        assert_eq!(result.content.matched, 3);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.badge.is_none());
    }

    #[test]
    fn test_empty_view_badge() {
        let snapshot = Snapshot::new(None, vec![record("AAA", 90.0, Action::Buy)]);
        let filter = FilterState::default().with_sector("Nowhere");
        let view = ScreenView::derive(&snapshot.records, &filter, SortState::default());

        let result = present_stock_list(&snapshot, &view, &filter, SortState::default(), None);
        let badge = result.badge.expect("badge");
        assert_eq!(badge.label, "No matching stocks");
        assert_eq!(result.content.filters.sectors, vec!["Nowhere"]);
    }
}
