//! Category Picker Popup
//!
//! Centered over the screen; the cursor row is highlighted and selected
//! values carry a filled marker.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::view_models::PickerViewModel;

const POPUP_WIDTH: u16 = 44;

pub struct PickerView<'a> {
    model: &'a PickerViewModel,
}

impl<'a> PickerView<'a> {
    pub fn new(model: &'a PickerViewModel) -> Self {
        Self { model }
    }
}

/// Rect of `width` by `height`, centered in `area` and clipped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

impl<'a> Widget for PickerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;
        let height = (model.options.len() as u16).saturating_add(2).min(area.height * 2 / 3);
        let popup = centered(area, POPUP_WIDTH, height.max(3));

        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", model.title));
        let inner = block.inner(popup);
        block.render(popup, buf);

        // Keep the cursor inside the visible slice of options.
        let capacity = inner.height as usize;
        let first = if capacity == 0 {
            0
        } else {
            model.cursor.saturating_sub(capacity - 1)
        };

        let lines: Vec<Line> = model
            .options
            .iter()
            .enumerate()
            .skip(first)
            .take(capacity)
            .map(|(i, option)| {
                let marker = if option.selected { "● " } else { "○ " };
                let style = if i == model.cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if option.selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(option.label.as_str(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 40, 10), Rect::new(30, 15, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let rect = centered(small, 40, 10);
        assert_eq!((rect.width, rect.height), (20, 5));
    }
}
