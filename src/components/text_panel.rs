use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Widget};

use crate::components::{Component, ComponentContext};
use crate::theme;

/// Static multi-line text. Lines are never wrapped; a window hanging off the
/// left edge shows the text scrolled by the hidden amount.
#[derive(Debug, Clone)]
pub struct TextPanelComponent {
    text: Text<'static>,
}

impl TextPanelComponent {
    pub fn new(body: &str) -> Self {
        let lines: Vec<Line<'static>> =
            body.lines().map(|l| Line::from(l.to_string())).collect();
        Self {
            text: Text::from(lines),
        }
    }

    #[cfg(test)]
    fn rendered_lines(&self) -> Vec<String> {
        self.text
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.to_string())
                    .collect::<String>()
            })
            .collect()
    }
}

impl Component for TextPanelComponent {
    fn render(&mut self, buffer: &mut Buffer, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut style = Style::default().bg(theme::window_bg()).fg(theme::window_fg());
        if !ctx.focused() {
            style = style.add_modifier(Modifier::DIM);
        }
        let (cols, rows) = ctx.hidden();
        Paragraph::new(self.text.clone())
            .style(style)
            .scroll((rows, cols))
            .render(area, buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buffer: &Buffer, y: u16) -> String {
        (buffer.area.x..buffer.area.right())
            .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(""))
            .collect()
    }

    #[test]
    fn keeps_source_lines() {
        let panel = TextPanelComponent::new("one\ntwo");
        assert_eq!(panel.rendered_lines(), vec!["one", "two"]);
    }

    #[test]
    fn hidden_columns_scroll_the_text() {
        let mut panel = TextPanelComponent::new("abcdef\nghijkl");
        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::empty(area);
        panel.render(&mut buffer, area, &ComponentContext::new(true).with_hidden(2, 0));
        assert_eq!(row(&buffer, 0), "cdef");
        assert_eq!(row(&buffer, 1), "ijkl");
    }

    #[test]
    fn empty_area_draws_nothing() {
        let mut panel = TextPanelComponent::new("text");
        let area = Rect::new(0, 0, 4, 1);
        let mut buffer = Buffer::empty(area);
        panel.render(&mut buffer, Rect::new(0, 0, 0, 0), &ComponentContext::new(true));
        assert_eq!(row(&buffer, 0), "    ");
    }
}
