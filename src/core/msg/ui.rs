/// Focus movement and activation of the focused widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    FocusNext,
    FocusPrev,
    Activate,
}
