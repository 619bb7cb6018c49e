//! Detail Pane View Component

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use stockterm_runtime::DisplayConfig;

use crate::presentation::formatters::labels::{action_tone, warning_label, warning_tone};
use crate::presentation::formatters::{format_change, format_percent_detail, format_price};
use crate::presentation::view_models::{StockDetailViewModel, Tone};
use crate::presentation::views::metric_text;

use super::tone_to_color;

const LABEL_WIDTH: usize = 18;

pub struct DetailView<'a> {
    model: Option<&'a StockDetailViewModel>,
    display: &'a DisplayConfig,
}

impl<'a> DetailView<'a> {
    pub fn new(model: Option<&'a StockDetailViewModel>, display: &'a DisplayConfig) -> Self {
        Self { model, display }
    }
}

fn heading(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn lines<'m>(data: &'m StockDetailViewModel, display: &DisplayConfig) -> Vec<Line<'m>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                data.code.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(data.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("{} | {}", data.sector, data.sub_sector),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let change_tone = match data.change {
        Some(c) if c > 0.0 => Tone::Positive,
        Some(c) if c < 0.0 => Tone::Negative,
        _ => Tone::Neutral,
    };
    let score = data
        .score
        .map(|s| format!("{:.0}", s))
        .unwrap_or_else(|| "-".to_string());
    lines.push(Line::from(vec![
        Span::styled(
            format_price(data.price, display),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format_change(data.change, data.change_pct, display),
            Style::default().fg(tone_to_color(change_tone)),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Score "),
        Span::styled(
            score,
            Style::default()
                .fg(tone_to_color(data.score_tier.tone()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            data.action.as_deref().unwrap_or("-"),
            Style::default()
                .fg(tone_to_color(action_tone(data.action.as_deref())))
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if !data.warnings.is_empty() {
        let mut badges = Vec::new();
        for warning in &data.warnings {
            badges.push(Span::styled(
                warning_label(warning),
                Style::default().fg(tone_to_color(warning_tone(warning))),
            ));
            badges.push(Span::raw(" "));
        }
        lines.push(Line::from(badges));
    }

    for section in &data.sections {
        lines.push(Line::from(""));
        lines.push(heading(section.title));
        for row in &section.rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", row.label, width = LABEL_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    metric_text(&row.value, display),
                    Style::default().fg(tone_to_color(row.tone)),
                ),
            ]));
        }
    }

    if !data.top_shareholders.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Top Shareholders"));
        for holder in &data.top_shareholders {
            let mut spans = vec![
                Span::raw(holder.name.as_str()),
                Span::raw(" "),
                Span::styled(
                    format_percent_detail(holder.percentage),
                    Style::default().fg(Color::Cyan),
                ),
            ];
            if !holder.badges.is_empty() {
                spans.push(Span::styled(
                    format!(" [{}]", holder.badges.join(", ")),
                    Style::default().fg(Color::Yellow),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    if !data.indexes.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Indexes"));
        lines.push(Line::from(data.indexes.join(", ")));
    }

    if !data.underwriters.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("IPO Underwriters"));
        for broker in &data.underwriters {
            let text = match &broker.id {
                Some(id) => format!("{} ({})", broker.name, id),
                None => broker.name.clone(),
            };
            lines.push(Line::from(text));
        }
    }

    lines
}

impl<'a> Widget for DetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Detail ");

        let Some(data) = self.model else {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "SELECT A STOCK",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Use ↑↓ keys or click a row",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        };

        Paragraph::new(lines(data, self.display))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
