//! Form component
//!
//! Renders the data-entry card: secret key, server URL, the entry table and
//! the Add Row / Submit buttons.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{ui::Focus, AppState},
    presentation::widgets::{
        buttons::ButtonWidget, entry_table::EntryTableWidget, text_field::TextFieldWidget,
    },
};

pub const TITLE: &str = "Data Entry";
pub const DESCRIPTION: &str = "Enter names, numbers, and server details";

/// Form component
#[derive(Debug, Clone)]
pub struct FormComponent;

impl FormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Line::from(TITLE).bold());
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Description
                Constraint::Length(3), // Secret key
                Constraint::Length(3), // Server URL
                Constraint::Length(1), // URL error
                Constraint::Min(4),    // Entries
                Constraint::Length(1), // Buttons
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(DESCRIPTION).style(Style::default().fg(Color::Gray)),
            chunks[0],
        );

        let focus = state.ui.focus;
        let connection = &state.connection;

        let secret_key = TextFieldWidget::masked("Secret Key", connection.secret_key_len())
            .placeholder("Enter your secret key")
            .focused(focus == Focus::SecretKey);
        frame.render_widget(secret_key, chunks[1]);

        let url_error = connection.url_error();
        let server_url = TextFieldWidget::new("Server URL", connection.server_url())
            .placeholder("Enter server URL (ws:// or wss://)")
            .focused(focus == Focus::ServerUrl)
            .invalid(url_error.is_some());
        frame.render_widget(server_url, chunks[2]);

        if let Some(message) = url_error {
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(Color::Red)),
                chunks[3],
            );
        }

        let focused_cell = match focus {
            Focus::Cell(row, column) => Some((row, column)),
            _ => None,
        };
        let table = EntryTableWidget::new(state.entries.entries()).focused(focused_cell);
        frame.render_widget(table, chunks[4]);

        self.view_buttons(state, frame, chunks[5]);
    }

    fn view_buttons(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let focus = state.ui.focus;
        let add_row = ButtonWidget::new("Add Row").focused(focus == Focus::AddRow);
        let submit = ButtonWidget::new("Submit")
            .focused(focus == Focus::Submit)
            .disabled(state.submission.is_in_flight());

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(add_row.width()),
                Constraint::Length(2),
                Constraint::Length(submit.width()),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(add_row, chunks[0]);
        frame.render_widget(submit, chunks[2]);
    }
}

impl Default for FormComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        core::{
            msg::form::FormMsg,
            state::ui::Column,
        },
        test_helpers::buffer_lines,
    };

    fn render(state: &AppState) -> color_eyre::Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(60, 24))?;
        let form = FormComponent::new();
        terminal.draw(|frame| form.view(state, frame, frame.area()))?;
        Ok(buffer_lines(terminal.backend().buffer()))
    }

    #[test]
    fn test_initial_form() -> color_eyre::Result<()> {
        let state = AppState::default();

        let lines = render(&state)?;
        let screen = lines.join("\n");

        assert!(lines[0].contains(TITLE));
        assert!(lines[1].contains(DESCRIPTION));
        assert!(screen.contains("Secret Key"));
        assert!(screen.contains("Server URL"));
        assert_eq!(screen.matches("Enter name").count(), 2);
        assert!(screen.contains("[ Add Row ]"));
        assert!(screen.contains("[ Submit ]"));
        assert!(!screen.contains("must start with"));

        Ok(())
    }

    #[test]
    fn test_empty_fields_show_placeholders() -> color_eyre::Result<()> {
        let mut state = AppState::default();
        state.ui.focus = Focus::Submit;

        let screen = render(&state)?.join("\n");

        assert!(screen.contains("Enter your secret key"));
        assert!(screen.contains("Enter server URL (ws:// or wss://)"));

        Ok(())
    }

    #[test]
    fn test_secret_key_is_masked() -> color_eyre::Result<()> {
        let mut state = AppState::default();
        state
            .connection
            .update(FormMsg::SetSecretKey("abcdef".to_string()));
        state.ui.focus = Focus::ServerUrl;

        let screen = render(&state)?.join("\n");

        assert!(screen.contains("••••••"));
        assert!(!screen.contains("abcdef"));

        Ok(())
    }

    #[test]
    fn test_invalid_url_shows_error() -> color_eyre::Result<()> {
        let mut state = AppState::default();
        state
            .connection
            .update(FormMsg::SetServerUrl("http://relay".to_string()));

        let screen = render(&state)?.join("\n");

        assert!(screen.contains("Server URL must start with ws:// or wss://"));

        Ok(())
    }

    #[test]
    fn test_added_row_is_rendered() -> color_eyre::Result<()> {
        let mut state = AppState::default();
        state.entries.add_row();
        state.entries.set_name(2, "Carol".to_string());
        state.ui.focus = Focus::Cell(2, Column::Name);

        let screen = render(&state)?.join("\n");

        assert!(screen.contains("Carol▏"));
        assert_eq!(screen.matches("Enter name").count(), 2);

        Ok(())
    }
}
