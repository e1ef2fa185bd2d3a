use chrono::{DateTime, Local};
use nostr_sdk::prelude::*;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::submission::{Phase, SubmitOutcome};

const KEY_HINTS: &str = "Tab: next  Ctrl-N: add row  Ctrl-S: submit  Esc: quit";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext<'a> {
    pub phase: Phase,
    pub in_flight: bool,
    pub last_outcome: Option<&'a SubmitOutcome>,
}

pub struct StatusBarWidget<'a> {
    message: Option<String>,
    ctx: ViewContext<'a>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<String>, ctx: ViewContext<'a>) -> Self {
        Self { message, ctx }
    }

    pub fn phase_label(&self) -> String {
        let published_at = match self.ctx.last_outcome {
            Some(SubmitOutcome::Published { published_at, .. }) if !self.ctx.in_flight => {
                format_time(*published_at)
            }
            _ => None,
        };

        match published_at {
            Some(time) => format!("{} at {time}", self.ctx.phase),
            None => self.ctx.phase.to_string(),
        }
    }
}

fn format_time(timestamp: Timestamp) -> Option<String> {
    DateTime::from_timestamp(timestamp.as_secs() as i64, 0)
        .map(|dt| dt.with_timezone(&Local).format("%T").to_string())
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);

        let phase_color = match self.ctx.phase {
            Phase::Closed if self.ctx.last_outcome.is_some_and(SubmitOutcome::is_success) => {
                Color::Green
            }
            Phase::Closed | Phase::Aborted => Color::Red,
            phase if phase.is_active() => Color::Yellow,
            _ => Color::Gray,
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.phase_label()),
                Style::default().fg(Color::Black).bg(phase_color),
            ),
            Span::raw(" "),
            Span::styled(KEY_HINTS, Style::default().fg(Color::Gray).italic()),
        ]);
        Paragraph::new(line)
            .style(Style::default().bg(Color::Black))
            .render(layout[1], buf);

        Paragraph::new(self.message.unwrap_or_default()).render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::submission::SubmitError, test_helpers::buffer_lines};

    fn ctx(phase: Phase, last_outcome: Option<&SubmitOutcome>) -> ViewContext<'_> {
        ViewContext {
            phase,
            in_flight: phase.is_active(),
            last_outcome,
        }
    }

    #[test]
    fn test_idle_label() {
        let widget = StatusBarWidget::new(None, ctx(Phase::Idle, None));

        assert_eq!(widget.phase_label(), "Idle");
    }

    #[test]
    fn test_published_label_has_time() {
        let outcome = SubmitOutcome::Published {
            event_id: EventId::all_zeros(),
            relay_url: "wss://relay.example.com".to_string(),
            published_at: Timestamp::from(1_700_000_000),
        };
        let widget = StatusBarWidget::new(None, ctx(Phase::Closed, Some(&outcome)));

        let label = widget.phase_label();

        assert!(label.starts_with("Closed at "));
        assert_eq!(label.len(), "Closed at 00:00:00".len());
    }

    #[test]
    fn test_failed_label_has_no_time() {
        let outcome = SubmitOutcome::Failed(SubmitError::InvalidServerUrl);
        let widget = StatusBarWidget::new(None, ctx(Phase::Aborted, Some(&outcome)));

        assert_eq!(widget.phase_label(), "Aborted");
    }

    #[test]
    fn test_render_message_and_hints() {
        let area = Rect::new(0, 0, 80, 2);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(
            Some("[Connecting] wss://relay.example.com".to_string()),
            ctx(Phase::Connecting, None),
        )
        .render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert!(lines[0].contains("Connecting"));
        assert!(lines[0].contains("Ctrl-S: submit"));
        assert!(lines[1].starts_with("[Connecting] wss://relay.example.com"));
    }
}
