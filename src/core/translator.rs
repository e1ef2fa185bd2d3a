use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{form::FormMsg, submission::SubmissionMsg, system::SystemMsg, ui::UiMsg, Msg},
    raw_msg::RawMsg,
    state::{
        ui::{Column, Focus},
        AppState,
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // User input - translate based on the focused widget
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => edit_focused(state, Edit::Insert(text)),

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Form(FormMsg::AddRow)],

        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Submission(SubmissionMsg::Submit)],

        KeyEvent {
            code: KeyCode::Tab | KeyCode::Down,
            ..
        } => vec![Msg::Ui(UiMsg::FocusNext)],

        KeyEvent {
            code: KeyCode::BackTab | KeyCode::Up,
            ..
        } => vec![Msg::Ui(UiMsg::FocusPrev)],

        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => vec![Msg::Ui(UiMsg::Activate)],

        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => edit_focused(state, Edit::DeleteBack),

        KeyEvent {
            code: KeyCode::Char(c),
            modifiers,
            ..
        } if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            edit_focused(state, Edit::Insert(c.to_string()))
        }

        _ => vec![],
    }
}

/// Characters an HTML number input accepts
fn is_number_input_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

/// A single keystroke or paste applied to the focused field
enum Edit {
    Insert(String),
    DeleteBack,
}

impl Edit {
    fn apply(&self, current: &str) -> String {
        match self {
            Edit::Insert(text) => format!("{current}{text}"),
            Edit::DeleteBack => {
                let mut value = current.to_string();
                value.pop();
                value
            }
        }
    }

    /// Drops inserted characters a number input would reject; existing text is left alone
    fn for_number(self) -> Self {
        match self {
            Edit::Insert(text) => {
                Edit::Insert(text.chars().filter(|c| is_number_input_char(*c)).collect())
            }
            Edit::DeleteBack => Edit::DeleteBack,
        }
    }
}

/// Produces the message that replaces the focused field with the edited value
fn edit_focused(state: &AppState, edit: Edit) -> Vec<Msg> {
    match state.ui.focus {
        Focus::SecretKey => {
            let value = edit.apply(state.connection.expose_secret_key());
            vec![Msg::Form(FormMsg::SetSecretKey(value))]
        }
        Focus::ServerUrl => {
            let value = edit.apply(state.connection.server_url());
            vec![Msg::Form(FormMsg::SetServerUrl(value))]
        }
        Focus::Cell(row, column) => {
            let Some(entry) = state.entries.get(row) else {
                return vec![];
            };
            match column {
                Column::Name => vec![Msg::Form(FormMsg::SetName(row, edit.apply(&entry.name)))],
                Column::Number => {
                    let value = edit.for_number().apply(&entry.number);
                    if value == entry.number {
                        vec![]
                    } else {
                        vec![Msg::Form(FormMsg::SetNumber(row, value))]
                    }
                }
            }
        }
        Focus::AddRow | Focus::Submit => vec![],
    }
}
