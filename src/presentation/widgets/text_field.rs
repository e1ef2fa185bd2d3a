use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

const MASK_CHAR: char = '•';
const CURSOR: char = '▏';

/// Single-line bordered input
#[derive(Debug, Clone)]
pub struct TextFieldWidget<'a> {
    title: &'a str,
    value: String,
    placeholder: &'a str,
    focused: bool,
    invalid: bool,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(title: &'a str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            placeholder: "",
            focused: false,
            invalid: false,
        }
    }

    /// Password-style field showing one mask character per typed character
    pub fn masked(title: &'a str, len: usize) -> Self {
        Self::new(title, MASK_CHAR.to_string().repeat(len))
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Text shown inside the border; the value is cut from the left so the
    /// end (where typing happens) stays visible
    pub fn visible_text(&self, width: u16) -> String {
        let mut text = self.value.clone();
        if self.focused {
            text.push(CURSOR);
        }

        let width = width as usize;
        let mut used = 0;
        let mut visible: Vec<char> = Vec::new();
        for c in text.chars().rev() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            visible.push(c);
        }
        visible.into_iter().rev().collect()
    }
}

impl<'a> Widget for TextFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = match (self.focused, self.invalid) {
            (_, true) => Style::default().fg(Color::Red),
            (true, false) => Style::default().fg(Color::Cyan),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray).italic(),
            ))
        } else {
            Line::from(self.visible_text(inner.width))
        };
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_helpers::buffer_lines;

    #[test]
    fn test_masked_value() {
        let field = TextFieldWidget::masked("Secret key", 3);

        assert_eq!(field.visible_text(10), "•••");
    }

    #[test]
    fn test_visible_text_keeps_tail() {
        let field = TextFieldWidget::new("URL", "wss://relay.example.com");

        assert_eq!(field.visible_text(9), "ample.com");
    }

    #[test]
    fn test_visible_text_with_cursor() {
        let field = TextFieldWidget::new("URL", "wss://").focused(true);

        assert_eq!(field.visible_text(20), "wss://▏");
    }

    #[test]
    fn test_visible_text_wide_chars() {
        let field = TextFieldWidget::new("Name", "日本語");

        assert_eq!(field.visible_text(5), "本語");
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buffer = Buffer::empty(area);

        TextFieldWidget::new("Server URL", "")
            .placeholder("Enter server URL")
            .render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert!(lines[0].contains("Server URL"));
        assert!(lines[1].contains("Enter server URL"));
    }

    #[test]
    fn test_render_value() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buffer = Buffer::empty(area);

        TextFieldWidget::new("Server URL", "ws://localhost")
            .placeholder("Enter server URL")
            .render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert!(lines[1].contains("ws://localhost"));
        assert!(!lines[1].contains("Enter server URL"));
    }
}
