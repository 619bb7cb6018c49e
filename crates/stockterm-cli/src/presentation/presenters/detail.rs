use stockterm_types::{StockRecord, finite};

use super::stock::change_percent;
use crate::presentation::formatters::labels::{
    flag_above, flag_below, risk_label, score_tier, tone_above, trend_label,
};
use crate::presentation::view_models::{
    MetricRow, MetricSection, MetricValue, ShareholderEntry, StockDetailViewModel, Tone,
    UnderwriterEntry, WarningBadge,
};

const TOP_SHAREHOLDERS: usize = 5;

pub fn present_detail(record: &StockRecord) -> StockDetailViewModel {
    let change = record.price_change();
    StockDetailViewModel {
        code: record.code.to_string(),
        name: record.name().to_string(),
        sector: record.sector().to_string(),
        sub_sector: record.sub_sector().to_string(),
        date: record.date.clone(),
        price: finite(record.price),
        change,
        change_pct: change_percent(change, record.previous_price),
        score: finite(record.score),
        score_tier: score_tier(record.score),
        action: record.action.map(|a| a.as_str().to_string()),
        warnings: warnings(record),
        sections: sections(record),
        top_shareholders: record
            .shareholders
            .iter()
            .take(TOP_SHAREHOLDERS)
            .map(|holder| ShareholderEntry {
                name: holder.name.clone(),
                percentage: finite(holder.percentage),
                badges: holder.badges.clone(),
            })
            .collect(),
        indexes: record.indexes.clone(),
        underwriters: record
            .ipo_underwriters
            .iter()
            .map(|broker| UnderwriterEntry {
                name: broker.broker_name.clone(),
                id: broker.broker_id.clone(),
            })
            .collect(),
    }
}

fn warnings(record: &StockRecord) -> Vec<WarningBadge> {
    let mut badges = Vec::new();
    if let Some(ff) = finite(record.free_float)
        && ff < 0.2
    {
        badges.push(WarningBadge::LowFreeFloat { free_float: ff });
    }
    if record.has_controlling_shareholder {
        badges.push(WarningBadge::Controlled);
    }
    if finite(record.fcf_ttm).is_some_and(|v| v > 0.0) {
        badges.push(WarningBadge::CashGenerative);
    }
    if finite(record.altman_z).is_some_and(|z| z < 2.0) {
        badges.push(WarningBadge::DistressRisk);
    }
    badges
}

fn number(value: Option<f64>, decimals: usize) -> MetricValue {
    MetricValue::Number {
        value: finite(value),
        decimals,
    }
}

fn percent(value: Option<f64>) -> MetricValue {
    MetricValue::Percent {
        value: finite(value),
    }
}

fn currency(value: Option<f64>) -> MetricValue {
    MetricValue::Currency {
        value: finite(value),
    }
}

fn text(value: Option<&str>) -> MetricValue {
    MetricValue::Text {
        value: value.filter(|v| !v.is_empty()).map(str::to_string),
    }
}

/// Positive above zero, negative below.
fn signed_tone(value: Option<f64>) -> Tone {
    match finite(value) {
        Some(v) if v > 0.0 => Tone::Positive,
        Some(v) if v < 0.0 => Tone::Negative,
        _ => Tone::Neutral,
    }
}

fn sections(r: &StockRecord) -> Vec<MetricSection> {
    let (risk, risk_tone) = risk_label(r.altman_z);
    let (trend, trend_tone) = trend_label(r.shareholder_trend_latest.as_deref());

    vec![
        MetricSection {
            title: "Overview",
            rows: vec![
                MetricRow::new("Market Cap", number(r.market_cap, 2)),
                MetricRow::new("Free Float", percent(r.free_float))
                    .with_tone(flag_below(r.free_float, 0.2, Tone::Caution)),
                MetricRow::new("IPO Date", text(r.ipo_date.as_deref())),
                MetricRow::new("IPO Price", currency(r.ipo_price)),
                MetricRow::new("IPO Board", text(r.ipo_board.as_deref())),
                MetricRow::new("Group", text(r.group.as_deref())),
            ],
        },
        MetricSection {
            title: "Valuation",
            rows: vec![
                MetricRow::new("P/E (TTM)", number(r.pe_ttm, 1)),
                MetricRow::new("P/BV", number(r.pbv, 2)),
                MetricRow::new("Fair P/BV", number(r.fair_pbv, 2)),
                MetricRow::new("P/S", number(r.ps, 2)),
                MetricRow::new("EV/EBITDA", number(r.ev_ebitda, 1)),
                MetricRow::new("Earnings Yield", percent(r.earnings_yield)),
                MetricRow::new("Intrinsic Price", currency(r.intrinsic_price))
                    .with_tone(Tone::Accent),
            ],
        },
        MetricSection {
            title: "Quality",
            rows: vec![
                MetricRow::new("ROE", percent(r.roe)).with_tone(tone_above(r.roe, 0.15)),
                MetricRow::new("ROA", percent(r.roa)),
                MetricRow::new("ROIC", percent(r.roic)),
                MetricRow::new("Net Margin", percent(r.net_margin)),
                MetricRow::new("Operating Margin", percent(r.operating_margin)),
                MetricRow::new("EPS (TTM)", currency(r.eps_ttm)),
                MetricRow::new("Book Value/Share", currency(r.book_value_per_share)),
            ],
        },
        MetricSection {
            title: "Cash Flow",
            rows: vec![
                MetricRow::new("FCF (TTM)", number(r.fcf_ttm, 2)).with_tone(signed_tone(r.fcf_ttm)),
                MetricRow::new("FCF/Share", currency(r.fcf_per_share)),
                MetricRow::new("Operating CF", number(r.operating_cashflow, 2)),
            ],
        },
        MetricSection {
            title: "Growth",
            rows: vec![
                MetricRow::new("Revenue YoY", percent(r.revenue_yoy))
                    .with_tone(signed_tone(r.revenue_yoy)),
                MetricRow::new("Net Income YoY", percent(r.net_income_yoy))
                    .with_tone(signed_tone(r.net_income_yoy)),
            ],
        },
        MetricSection {
            title: "Risk",
            rows: vec![
                MetricRow::new("Debt/Equity", number(r.debt_to_equity, 2))
                    .with_tone(flag_above(r.debt_to_equity, 1.0, Tone::Negative)),
                MetricRow::new("Interest Coverage", number(r.interest_coverage, 1)),
                MetricRow::new("Current Ratio", number(r.current_ratio, 2)),
                MetricRow::new("Quick Ratio", number(r.quick_ratio, 2)),
                MetricRow::new("Altman Z-Score", number(r.altman_z, 1)).with_tone(risk_tone),
                MetricRow::new("Risk Level", text(Some(risk))).with_tone(risk_tone),
            ],
        },
        MetricSection {
            title: "Dividend",
            rows: vec![
                MetricRow::new("Dividend Yield", percent(r.dividend_yield))
                    .with_tone(tone_above(r.dividend_yield, 0.05)),
                MetricRow::new("Payout Ratio", percent(r.payout_ratio)),
            ],
        },
        MetricSection {
            title: "Ownership",
            rows: vec![
                MetricRow::new("Top 1 Holder", percent(r.shareholder_top1_pct)),
                MetricRow::new("Top 3 Holders", percent(r.shareholder_top3_pct))
                    .with_tone(flag_above(r.shareholder_top3_pct, 0.75, Tone::Accent)),
                MetricRow::new("Shareholder Count", number(r.shareholder_count, 0)),
                MetricRow::new("Trend", text(Some(trend))).with_tone(trend_tone),
            ],
        },
    ]
}
