//! Stock Table View Component
//!
//! Only rows with a viewport line are drawn; overscan rows exist in the
//! model but stay off screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};
use stockterm_runtime::DisplayConfig;

use crate::presentation::formatters::labels::{action_tone, flag_above, flag_below, tone_above, trend_label};
use crate::presentation::formatters::{
    format_number, format_percent, format_price, format_signed_percent,
};
use crate::presentation::view_models::{StockRowViewModel, TableBody, TableRow, TableViewModel, Tone};

use super::tone_to_color;

/// Column widths in the order of the table's columns.
const WIDTHS: [u16; 19] = [6, 18, 14, 14, 10, 8, 7, 7, 6, 6, 6, 7, 6, 5, 6, 8, 4, 5, 6];

pub struct TableView<'a> {
    model: &'a TableViewModel,
    display: &'a DisplayConfig,
}

impl<'a> TableView<'a> {
    pub fn new(model: &'a TableViewModel, display: &'a DisplayConfig) -> Self {
        Self { model, display }
    }

    fn header(&self) -> Row<'a> {
        let cells = self.model.columns.iter().map(|column| {
            let text = match column.sort_arrow {
                Some(arrow) => format!("{}{}", column.label, arrow),
                None => column.label.to_string(),
            };
            let style = if column.sort_arrow.is_some() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(text).style(style)
        });
        Row::new(cells).bottom_margin(0)
    }

    fn row(&self, row: &TableRow) -> Row<'a> {
        let stock = &row.stock;
        let row_style = if row.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Row::new(cells(stock, self.display)).style(row_style)
    }
}

fn toned(text: String, tone: Tone) -> Cell<'static> {
    Cell::from(text).style(Style::default().fg(tone_to_color(tone)))
}

fn cells(stock: &StockRowViewModel, display: &DisplayConfig) -> Vec<Cell<'static>> {
    let change_tone = match stock.change {
        Some(c) if c > 0.0 => Tone::Positive,
        Some(c) if c < 0.0 => Tone::Negative,
        _ => Tone::Neutral,
    };
    let change_pct = if stock.change.is_some() {
        format_signed_percent(stock.change_pct)
    } else {
        "-".to_string()
    };
    let score = stock
        .score
        .map(|s| format!("{:.0}", s))
        .unwrap_or_else(|| "-".to_string());
    let (trend, trend_tone) = trend_label(stock.trend.as_deref());

    vec![
        toned(stock.code.clone(), Tone::Accent),
        Cell::from(stock.name.clone()),
        Cell::from(stock.sector.clone()),
        Cell::from(stock.sub_sector.clone()),
        Cell::from(stock.group.clone().unwrap_or_else(|| "-".to_string())),
        Cell::from(format_price(stock.price, display)),
        toned(change_pct, change_tone),
        Cell::from(format_number(stock.market_cap, 2)),
        Cell::from(format_number(stock.pbv, 2)),
        Cell::from(format_number(stock.pe_ttm, 1)),
        toned(format_percent(stock.roe), tone_above(stock.roe, 0.15)),
        toned(
            format_number(stock.fcf_ttm, 1),
            flag_below(stock.fcf_ttm, 0.0, Tone::Negative),
        ),
        toned(
            format_percent(stock.dividend_yield),
            tone_above(stock.dividend_yield, 0.05),
        ),
        toned(
            format_number(stock.debt_to_equity, 2),
            flag_above(stock.debt_to_equity, 1.0, Tone::Negative),
        ),
        toned(
            format_percent(stock.free_float),
            flag_below(stock.free_float, 0.15, Tone::Caution),
        ),
        Cell::from(format_price(stock.intrinsic_price, display)),
        toned(score, stock.score_tier.tone()),
        toned(
            stock.action.clone().unwrap_or_else(|| "-".to_string()),
            action_tone(stock.action.as_deref()),
        ),
        toned(trend.to_string(), trend_tone),
    ]
}

fn placeholder<'t>(title: &'t str, hint: Option<&'t str>, color: Color) -> Paragraph<'t> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(hint) = hint {
        lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));
    }
    Paragraph::new(lines).alignment(Alignment::Center)
}

impl<'a> Widget for TableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Stocks ");

        let rows = match &self.model.body {
            TableBody::Rows { rows } => rows,
            TableBody::Loading => {
                placeholder("LOADING...", None, Color::Cyan)
                    .block(block)
                    .render(area, buf);
                return;
            }
            TableBody::Failed { reason } => {
                placeholder("ERROR", Some(reason.as_str()), Color::Red)
                    .block(block)
                    .render(area, buf);
                return;
            }
            TableBody::NoData => {
                placeholder("NO DATA", Some("Snapshot holds no records"), Color::Yellow)
                    .block(block)
                    .render(area, buf);
                return;
            }
            TableBody::NoMatches => {
                placeholder("NO MATCHING STOCKS", Some("Relax filters"), Color::Yellow)
                    .block(block)
                    .render(area, buf);
                return;
            }
        };

        let mut on_screen: Vec<&TableRow> = rows.iter().filter(|r| r.line.is_some()).collect();
        on_screen.sort_by_key(|r| r.line);

        let widths = WIDTHS.iter().map(|&w| Constraint::Length(w));
        let table = Table::new(on_screen.into_iter().map(|r| self.row(r)), widths)
            .header(self.header())
            .column_spacing(1)
            .block(block);
        Widget::render(table, area, buf);
    }
}
