use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// A bracketed label such as `[ Submit ]`
#[derive(Debug, Clone)]
pub struct ButtonWidget<'a> {
    label: &'a str,
    focused: bool,
    disabled: bool,
}

impl<'a> ButtonWidget<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            disabled: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn text(&self) -> String {
        format!("[ {} ]", self.label)
    }

    pub fn width(&self) -> u16 {
        self.text().chars().count() as u16
    }
}

impl<'a> Widget for ButtonWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = match (self.focused, self.disabled) {
            (true, _) => Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::DarkGray),
            (false, false) => Style::default().fg(Color::White),
        };
        Paragraph::new(Span::styled(self.text(), style)).render(area, buf);
    }
}
