pub mod form;
pub mod submission;
pub mod system;
pub mod ui;

use form::FormMsg;
use submission::SubmissionMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Form edits (entries and connection parameters)
    Form(FormMsg),

    // Submission workflow
    Submission(SubmissionMsg),

    // Focus handling
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Submission(SubmissionMsg::Progress(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::submission::Phase;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Form(FormMsg::AddRow).is_frequent());
        assert!(Msg::Submission(SubmissionMsg::Progress(Phase::Publishing)).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::Form(FormMsg::AddRow), Msg::Form(FormMsg::AddRow));
        assert_ne!(
            Msg::Form(FormMsg::SetName(0, "Alice".into())),
            Msg::Form(FormMsg::SetName(1, "Alice".into()))
        );
    }
}
