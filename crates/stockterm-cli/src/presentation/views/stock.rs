use std::fmt;

use crate::presentation::formatters::labels::{action_tone, flag_above, tone_above, trend_label};
use crate::presentation::formatters::{
    fit, format_number, format_percent, format_price, format_signed_percent,
};
use crate::presentation::view_models::{
    CreateView, CsvTable, StockListViewModel, StockRowViewModel, Tone,
};

use super::{ViewContext, csv_number};

const DEFAULT_NAME_WIDTH: usize = 24;
const MIN_NAME_WIDTH: usize = 12;
const MAX_NAME_WIDTH: usize = 40;

// Widths of every column except NAME, separators included.
const FIXED_WIDTH: usize = 7 + 17 + 10 + 8 + 8 + 7 + 7 + 7 + 7 + 6 + 5 + 6 + 7;

impl CreateView for StockListViewModel {
    fn create_view<'a>(&'a self, ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a> {
        Box::new(StockListView { data: self, ctx })
    }

    fn to_csv(&self) -> Option<CsvTable> {
        Some(CsvTable {
            headers: vec![
                "code",
                "name",
                "sector",
                "sub_sector",
                "group",
                "price",
                "change",
                "change_pct",
                "market_cap",
                "pbv",
                "pe_ttm",
                "roe",
                "fcf_ttm",
                "dividend_yield",
                "debt_to_equity",
                "free_float",
                "intrinsic_price",
                "score",
                "action",
                "trend",
            ],
            rows: self.rows.iter().map(csv_row).collect(),
        })
    }
}

fn csv_row(row: &StockRowViewModel) -> Vec<String> {
    vec![
        row.code.clone(),
        row.name.clone(),
        row.sector.clone(),
        row.sub_sector.clone(),
        row.group.clone().unwrap_or_default(),
        csv_number(row.price),
        csv_number(row.change),
        csv_number(row.change_pct),
        csv_number(row.market_cap),
        csv_number(row.pbv),
        csv_number(row.pe_ttm),
        csv_number(row.roe),
        csv_number(row.fcf_ttm),
        csv_number(row.dividend_yield),
        csv_number(row.debt_to_equity),
        csv_number(row.free_float),
        csv_number(row.intrinsic_price),
        csv_number(row.score),
        row.action.clone().unwrap_or_default(),
        row.trend.clone().unwrap_or_default(),
    ]
}

struct StockListView<'a> {
    data: &'a StockListViewModel,
    ctx: &'a ViewContext,
}

impl<'a> StockListView<'a> {
    fn name_width(&self) -> usize {
        match self.ctx.width {
            Some(width) => width
                .saturating_sub(FIXED_WIDTH)
                .clamp(MIN_NAME_WIDTH, MAX_NAME_WIDTH),
            None => DEFAULT_NAME_WIDTH,
        }
    }

    /// Right-align into `width`, then paint.
    fn cell(&self, text: &str, width: usize, tone: Tone) -> String {
        self.ctx.paint(&format!("{:>width$}", text, width = width), tone)
    }
}

impl<'a> fmt::Display for StockListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        let display = &self.ctx.display;
        let name_width = self.name_width();

        writeln!(
            f,
            "Snapshot {}: {} of {} stocks",
            data.date.as_deref().unwrap_or("-"),
            data.matched,
            data.total
        )?;
        if let Some(sort) = &data.sort {
            writeln!(f, "Sorted by {} ({})", sort.column, sort.direction)?;
        }
        writeln!(f)?;

        if data.rows.is_empty() {
            return Ok(());
        }

        let header = format!(
            "{:<6} {:<nw$} {:<16} {:>9} {:>7} {:>7} {:>6} {:>6} {:>6} {:>6} {:>5} {:>4} {:<5} {:<6}",
            "TICKER", "NAME", "SECTOR", "PRICE", "CHG%", "MCAP", "PBV", "PE", "ROE", "DY%", "D/E",
            "SCR", "ACT", "TREND",
            nw = name_width
        );
        writeln!(f, "{}", self.ctx.bold(&header))?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;

        for row in &data.rows {
            let change_tone = match row.change {
                Some(c) if c > 0.0 => Tone::Positive,
                Some(c) if c < 0.0 => Tone::Negative,
                _ => Tone::Neutral,
            };
            let (trend, trend_tone) = trend_label(row.trend.as_deref());
            let change_pct = if row.change.is_some() {
                format_signed_percent(row.change_pct)
            } else {
                "-".to_string()
            };
            let score = row
                .score
                .map(|s| format!("{:.0}", s))
                .unwrap_or_else(|| "-".to_string());

            writeln!(
                f,
                "{} {} {} {} {} {} {} {} {} {} {} {} {} {}",
                self.ctx.paint(&fit(&row.code, 6), Tone::Accent),
                fit(&row.name, name_width),
                fit(&row.sector, 16),
                self.cell(&format_price(row.price, display), 9, Tone::Neutral),
                self.cell(&change_pct, 7, change_tone),
                self.cell(&format_number(row.market_cap, 2), 7, Tone::Neutral),
                self.cell(&format_number(row.pbv, 2), 6, Tone::Neutral),
                self.cell(&format_number(row.pe_ttm, 1), 6, Tone::Neutral),
                self.cell(&format_percent(row.roe), 6, tone_above(row.roe, 0.15)),
                self.cell(&format_percent(row.dividend_yield), 6, tone_above(row.dividend_yield, 0.05)),
                self.cell(
                    &format_number(row.debt_to_equity, 2),
                    5,
                    flag_above(row.debt_to_equity, 1.0, Tone::Negative)
                ),
                self.cell(&score, 4, row.score_tier.tone()),
                self.ctx.paint(
                    &fit(row.action.as_deref().unwrap_or("-"), 5),
                    action_tone(row.action.as_deref())
                ),
                self.ctx.paint(&fit(trend, 6), trend_tone),
            )?;
        }

        Ok(())
    }
}
