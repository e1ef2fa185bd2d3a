use crossterm::event::KeyEvent;

/// Raw events coming from the terminal and the host loop
///
/// These are translated into domain messages by
/// [`translate_raw_to_domain`](crate::core::translator::translate_raw_to_domain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMsg {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    Render,
    Quit,
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
