//! Status Bar View Component
//!
//! Status message and row position on the left, key hints for the current
//! focus on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{InputFocus, StatusBarViewModel};

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

fn hints(focus: InputFocus) -> &'static [(&'static str, &'static str)] {
    match focus {
        InputFocus::Table => &[
            ("[q]", "uit "),
            ("[↑↓]", "move "),
            ("[F1-F8]", "sort "),
            ("[r]", "efresh"),
        ],
        InputFocus::Search => &[("[Enter/Esc]", "done "), ("[Bksp]", "delete")],
        InputFocus::Picker => &[
            ("[↑↓]", "move "),
            ("[Enter]", "select "),
            ("[Space]", "toggle "),
            ("[Esc]", "close"),
        ],
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let mut status = Vec::new();
        if let Some((row, count)) = self.model.position {
            status.push(Span::raw(format!("Row {}/{} ", row, count)));
            status.push(Span::raw("| "));
        }
        if let Some(sort) = &self.model.sort {
            status.push(Span::raw(format!("Sort {} ", sort)));
            status.push(Span::raw("| "));
        }
        status.push(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(color),
        ));
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let help: Vec<Span> = hints(self.model.focus)
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::raw(*label),
                ]
            })
            .collect();
        Paragraph::new(Line::from(help)).render(chunks[1], buf);
    }
}
