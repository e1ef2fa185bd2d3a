use crate::{
    core::{cmd::Cmd, msg::form::FormMsg},
    domain::entry::{Entry, EntryList},
};

/// Rows of the form table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntriesState {
    entries: EntryList,
}

impl EntriesState {
    pub fn new(initial_rows: usize) -> Self {
        Self {
            entries: EntryList::with_blank_rows(initial_rows),
        }
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Appends a blank row at the end
    pub fn add_row(&mut self) {
        self.entries.push(Entry::default());
    }

    /// Replaces the name at `index`; returns false if there is no such row
    pub fn set_name(&mut self, index: usize, value: String) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.name = value;
                true
            }
            None => false,
        }
    }

    /// Replaces the number at `index`; returns false if there is no such row
    pub fn set_number(&mut self, index: usize, value: String) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.number = value;
                true
            }
            None => false,
        }
    }

    /// Entry-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FormMsg) -> Vec<Cmd> {
        let (index, applied) = match msg {
            FormMsg::AddRow => {
                self.add_row();
                return vec![];
            }
            FormMsg::SetName(index, value) => (index, self.set_name(index, value)),
            FormMsg::SetNumber(index, value) => (index, self.set_number(index, value)),
            FormMsg::SetSecretKey(_) | FormMsg::SetServerUrl(_) => return vec![],
        };

        if applied {
            vec![]
        } else {
            log::warn!("Ignoring edit of missing row {index} (rows: {})", self.len());
            vec![Cmd::LogError {
                message: format!("Row {index} does not exist"),
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_has_blank_rows() {
        let state = EntriesState::new(2);

        assert_eq!(state.len(), 2);
        assert_eq!(state.get(0), Some(&Entry::default()));
        assert_eq!(state.get(1), Some(&Entry::default()));
    }

    #[test]
    fn test_add_row_grows_by_one_and_keeps_prior_rows() {
        let mut state = EntriesState::new(2);
        state.set_name(0, "Alice".into());
        state.set_number(1, "7".into());
        let before = state.entries().clone();

        for expected_len in 3..=6 {
            state.add_row();

            assert_eq!(state.len(), expected_len);
            assert_eq!(&state.entries()[..before.len()], &before[..]);
            assert_eq!(state.get(expected_len - 1), Some(&Entry::default()));
        }
    }

    #[test]
    fn test_set_fields_in_place() {
        let mut state = EntriesState::new(3);

        assert!(state.set_name(1, "Bob".into()));
        assert!(state.set_number(1, "42".into()));

        assert_eq!(state.get(0), Some(&Entry::default()));
        assert_eq!(state.get(1), Some(&Entry::new("Bob", "42")));
        assert_eq!(state.get(2), Some(&Entry::default()));
    }

    #[test]
    fn test_number_is_free_text() {
        let mut state = EntriesState::new(1);

        assert!(state.set_number(0, "twelve".into()));
        assert_eq!(state.get(0).map(|e| e.number.as_str()), Some("twelve"));
    }

    #[test]
    fn test_update_out_of_range_is_ignored() {
        let mut state = EntriesState::new(1);

        let cmds = state.update(FormMsg::SetName(5, "ghost".into()));

        assert_eq!(state.len(), 1);
        assert_eq!(state.get(0), Some(&Entry::default()));
        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));
    }

    #[test]
    fn test_update_add_row() {
        let mut state = EntriesState::default();

        let cmds = state.update(FormMsg::AddRow);

        assert_eq!(state.len(), 1);
        assert!(cmds.is_empty());
    }
}
