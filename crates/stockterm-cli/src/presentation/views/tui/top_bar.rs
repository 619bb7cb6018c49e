//! Top Bar View Component
//!
//! Snapshot date, search box, category selections, action and preset
//! toggles, and the match count.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{ToggleEntry, TopBarViewModel};

use super::tone_to_color;

pub struct TopBarView<'a> {
    model: &'a TopBarViewModel,
}

impl<'a> TopBarView<'a> {
    pub fn new(model: &'a TopBarViewModel) -> Self {
        Self { model }
    }
}

fn toggle_spans(entry: &ToggleEntry) -> Vec<Span<'_>> {
    let style = if entry.active {
        Style::default()
            .fg(Color::Black)
            .bg(tone_to_color(entry.tone))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    vec![
        Span::styled(format!("[{}]", entry.key), Style::default().fg(Color::Yellow)),
        Span::styled(entry.label.as_str(), style),
        Span::raw(" "),
    ]
}

fn selection_span<'s>(label: &'s str, value: &'s Option<String>, all: &'s str) -> Vec<Span<'s>> {
    let value_span = match value {
        Some(v) => Span::styled(v.as_str(), Style::default().fg(Color::Cyan)),
        None => Span::styled(all, Style::default().fg(Color::DarkGray)),
    };
    vec![
        Span::styled(label, Style::default().fg(Color::Yellow)),
        value_span,
        Span::raw("  "),
    ]
}

impl<'a> Widget for TopBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" stockterm ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut first = vec![
            Span::styled(
                model.date.as_deref().unwrap_or("-"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        let search_style = if model.search_focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        if model.search.is_empty() && !model.search_focused {
            first.push(Span::styled("[f] Search...", Style::default().fg(Color::DarkGray)));
        } else {
            let cursor = if model.search_focused { "▏" } else { "" };
            first.push(Span::styled(
                format!("/{}{}", model.search, cursor),
                search_style,
            ));
        }
        first.push(Span::raw("  "));

        first.extend(selection_span("[s]", &model.sector, "All Sectors"));
        first.extend(selection_span("[u]", &model.sub_sector, "All Sub Sectors"));
        first.extend(selection_span("[t]", &model.tag, "All Tags"));

        first.push(Span::styled(
            format!("{} / {}", model.matched, model.total),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        if model.filters_active {
            first.push(Span::raw("  "));
            first.push(Span::styled("[Esc] Clear", Style::default().fg(Color::Red)));
        }
        if model.fetching {
            first.push(Span::raw("  "));
            first.push(Span::styled("⟳", Style::default().fg(Color::Cyan)));
        }

        let mut second: Vec<Span> = model.actions.iter().flat_map(toggle_spans).collect();
        second.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
        second.extend(model.presets.iter().flat_map(toggle_spans));

        Paragraph::new(vec![Line::from(first), Line::from(second)]).render(inner, buf);
    }
}
