/// Edits to the entry table and the connection fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    AddRow,
    SetName(usize, String),
    SetNumber(usize, String),
    SetSecretKey(String),
    SetServerUrl(String),
}
