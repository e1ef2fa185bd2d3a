//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::widgets::status_bar::{StatusBarWidget, ViewContext as StatusBarViewContext},
};

pub mod form;

pub use form::FormComponent;

/// Collection of all components
pub struct Components {
    pub form: FormComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            form: FormComponent::new(),
        }
    }

    /// Render all components
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Form
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.form.view(state, frame, layout[0]);

        let status_bar_ctx = StatusBarViewContext {
            phase: state.submission.phase(),
            in_flight: state.submission.is_in_flight(),
            last_outcome: state.submission.last_outcome(),
        };
        let status_bar =
            StatusBarWidget::new(state.system.status_message().cloned(), status_bar_ctx);
        frame.render_widget(status_bar, layout[1]);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{core::msg::system::SystemMsg, test_helpers::buffer_lines};

    #[test]
    fn test_render_places_status_bar_at_bottom() -> color_eyre::Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30))?;
        let mut state = AppState::default();
        state
            .system
            .update(SystemMsg::UpdateStatusMessage("hello".to_string()));
        let mut components = Components::new();

        terminal.draw(|frame| components.render(frame, &state))?;

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[0].contains("Data Entry"));
        assert!(lines[28].contains("Idle"));
        assert!(lines[29].starts_with("hello"));

        Ok(())
    }
}
