use crate::domain::submission::{Phase, SubmitOutcome};

/// Progress of the submission workflow
///
/// `in_flight` is the single-slot guard: a new submission can only begin
/// once the previous one produced an outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    phase: Phase,
    in_flight: bool,
    last_outcome: Option<SubmitOutcome>,
    attempts: u32,
}

impl SubmissionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.last_outcome.as_ref()
    }

    /// Number of submissions that were allowed to start
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Claims the in-flight slot; false if a submission is already outstanding
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.attempts += 1;
        self.phase = Phase::Validating;
        true
    }

    /// Moves to `phase` while in flight; progress after the outcome is ignored
    pub fn advance(&mut self, phase: Phase) {
        if self.in_flight {
            self.phase = phase;
        } else {
            log::debug!("Ignoring late submission progress: {phase}");
        }
    }

    /// Records the outcome and releases the in-flight slot
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        self.phase = outcome.terminal_phase();
        self.in_flight = false;
        self.last_outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::submission::SubmitError;

    #[test]
    fn test_default_is_idle() {
        let state = SubmissionState::default();

        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_in_flight());
        assert!(state.last_outcome().is_none());
    }

    #[test]
    fn test_begin_rejects_second_submission() {
        let mut state = SubmissionState::default();

        assert!(state.begin());
        assert!(!state.begin());
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.phase(), Phase::Validating);
    }

    #[test]
    fn test_finish_releases_slot() {
        let mut state = SubmissionState::default();
        state.begin();
        state.advance(Phase::Signing);

        state.finish(SubmitError::MissingSecretKey.into());

        assert!(!state.is_in_flight());
        assert_eq!(state.phase(), Phase::Aborted);
        assert_eq!(
            state.last_outcome(),
            Some(&SubmitOutcome::Failed(SubmitError::MissingSecretKey))
        );
        assert!(state.begin());
        assert_eq!(state.attempts(), 2);
    }

    #[test]
    fn test_advance_ignored_when_idle() {
        let mut state = SubmissionState::default();

        state.advance(Phase::Publishing);

        assert_eq!(state.phase(), Phase::Idle);
    }
}
