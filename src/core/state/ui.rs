use strum::Display;

/// Column of the entry table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Column {
    Name,
    Number,
}

/// The widget receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SecretKey,
    ServerUrl,
    Cell(usize, Column),
    AddRow,
    Submit,
}

impl Focus {
    /// Tab order: secret key, server URL, each row's name and number, Add Row, Submit
    fn position(&self, rows: usize) -> usize {
        match *self {
            Focus::SecretKey => 0,
            Focus::ServerUrl => 1,
            Focus::Cell(row, column) => {
                let row = row.min(rows.saturating_sub(1));
                let column = match column {
                    Column::Name => 0,
                    Column::Number => 1,
                };
                2 + row * 2 + column
            }
            Focus::AddRow => 2 + rows * 2,
            Focus::Submit => 3 + rows * 2,
        }
    }

    fn from_position(position: usize, rows: usize) -> Self {
        let cells = rows * 2;
        match position {
            0 => Focus::SecretKey,
            1 => Focus::ServerUrl,
            p if p < 2 + cells => {
                let offset = p - 2;
                let column = if offset % 2 == 0 {
                    Column::Name
                } else {
                    Column::Number
                };
                Focus::Cell(offset / 2, column)
            }
            p if p == 2 + cells => Focus::AddRow,
            _ => Focus::Submit,
        }
    }

    fn len(rows: usize) -> usize {
        4 + rows * 2
    }

    pub fn next(&self, rows: usize) -> Self {
        let len = Self::len(rows);
        Self::from_position((self.position(rows) + 1) % len, rows)
    }

    pub fn prev(&self, rows: usize) -> Self {
        let len = Self::len(rows);
        Self::from_position((self.position(rows) + len - 1) % len, rows)
    }
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_focus_cycles_forward_through_every_widget() {
        let rows = 2;
        let mut focus = Focus::default();
        let mut visited = vec![focus];
        for _ in 0..Focus::len(rows) {
            focus = focus.next(rows);
            visited.push(focus);
        }

        assert_eq!(
            visited,
            vec![
                Focus::SecretKey,
                Focus::ServerUrl,
                Focus::Cell(0, Column::Name),
                Focus::Cell(0, Column::Number),
                Focus::Cell(1, Column::Name),
                Focus::Cell(1, Column::Number),
                Focus::AddRow,
                Focus::Submit,
                Focus::SecretKey,
            ]
        );
    }

    #[test]
    fn test_focus_prev_wraps() {
        assert_eq!(Focus::SecretKey.prev(2), Focus::Submit);
        assert_eq!(Focus::AddRow.prev(2), Focus::Cell(1, Column::Number));
    }

    #[test]
    fn test_focus_without_rows() {
        assert_eq!(Focus::ServerUrl.next(0), Focus::AddRow);
        assert_eq!(Focus::AddRow.prev(0), Focus::ServerUrl);
    }
}
