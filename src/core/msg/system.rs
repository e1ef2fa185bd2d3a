#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    Quit,
    Resize(u16, u16),
    UpdateStatusMessage(String),
    ShowError(String),
}
