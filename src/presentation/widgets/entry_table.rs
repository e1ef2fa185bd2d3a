use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState};

use crate::{core::state::ui::Column, domain::entry::EntryList};

const NAME_PLACEHOLDER: &str = "Enter name";
const NUMBER_PLACEHOLDER: &str = "Enter number";

/// Name/number grid; the focused cell is highlighted and scrolled into view
#[derive(Debug)]
pub struct EntryTableWidget<'a> {
    entries: &'a EntryList,
    focused: Option<(usize, Column)>,
}

impl<'a> EntryTableWidget<'a> {
    pub fn new(entries: &'a EntryList) -> Self {
        Self {
            entries,
            focused: None,
        }
    }

    pub fn focused(mut self, focused: Option<(usize, Column)>) -> Self {
        self.focused = focused;
        self
    }

    fn cell(&self, row: usize, column: Column, value: &'a str) -> Cell<'a> {
        let is_focused = self.focused == Some((row, column));
        let placeholder = match column {
            Column::Name => NAME_PLACEHOLDER,
            Column::Number => NUMBER_PLACEHOLDER,
        };

        let cell = if value.is_empty() && !is_focused {
            Cell::from(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray).italic(),
            ))
        } else if is_focused {
            Cell::from(format!("{value}▏"))
        } else {
            Cell::from(value)
        };

        if is_focused {
            cell.style(Style::default().fg(Color::Black).bg(Color::Cyan))
        } else {
            cell
        }
    }
}

impl<'a> Widget for EntryTableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let header = Row::new(vec![
            Cell::from(Column::Name.to_string()),
            Cell::from(Column::Number.to_string()),
        ])
        .style(Style::default().bold())
        .bottom_margin(1);

        let rows: Vec<Row> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Row::new(vec![
                    self.cell(i, Column::Name, &entry.name),
                    self.cell(i, Column::Number, &entry.number),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [Constraint::Percentage(50), Constraint::Percentage(50)],
        )
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Entries"),
        );

        let mut table_state = TableState::default().with_selected(self.focused.map(|(row, _)| row));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::entry::Entry, test_helpers::buffer_lines};

    fn render(entries: &EntryList, focused: Option<(usize, Column)>, height: u16) -> Buffer {
        let area = Rect::new(0, 0, 40, height);
        let mut buffer = Buffer::empty(area);
        EntryTableWidget::new(entries)
            .focused(focused)
            .render(area, &mut buffer);
        buffer
    }

    #[test]
    fn test_header_and_placeholders() {
        let entries = EntryList::with_blank_rows(2);

        let lines = buffer_lines(&render(&entries, None, 8));

        assert!(lines[1].contains("Name"));
        assert!(lines[1].contains("Number"));
        assert!(lines[3].contains(NAME_PLACEHOLDER));
        assert!(lines[3].contains(NUMBER_PLACEHOLDER));
        assert!(lines[4].contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_values_replace_placeholders() {
        let entries: EntryList = vec![Entry::new("Alice", "42")].into();

        let lines = buffer_lines(&render(&entries, None, 6));

        assert!(lines[3].contains("Alice"));
        assert!(lines[3].contains("42"));
        assert!(!lines[3].contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_focused_cell_is_highlighted() {
        let entries: EntryList = vec![Entry::new("Alice", "42")].into();

        let buffer = render(&entries, Some((0, Column::Number)), 6);

        let line = &buffer_lines(&buffer)[3];
        assert!(line.contains("42▏"));
        let x = line
            .chars()
            .position(|c| c == '4')
            .map(|x| x as u16)
            .unwrap_or_default();
        assert_eq!(buffer[(x, 3)].bg, Color::Cyan);
    }

    #[test]
    fn test_focused_row_scrolls_into_view() {
        let entries: EntryList = (0..10)
            .map(|i| Entry::new(format!("row{i}"), i.to_string()))
            .collect::<Vec<_>>()
            .into();

        let lines = buffer_lines(&render(&entries, Some((9, Column::Name)), 7));

        assert!(lines.iter().any(|l| l.contains("row9")));
        assert!(!lines.iter().any(|l| l.contains("row0")));
    }
}
