use crate::domain::submission::{Phase, SubmitOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionMsg {
    /// User asked to sign and publish the current form
    Submit,
    /// Relay I/O moved to a new phase
    Progress(Phase),
    /// Relay I/O finished and the connection is closed
    Finished(SubmitOutcome),
}
