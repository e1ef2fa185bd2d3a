use std::error::Error;
use std::fmt;

use nostr_sdk::prelude::*;
use strum::Display;

/// Fixed message shown under the server URL field when it has the wrong scheme
pub const INVALID_SERVER_URL_MESSAGE: &str = "Server URL must start with ws:// or wss://";

/// Phases of a single submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Signing,
    Verifying,
    Connecting,
    Publishing,
    Closed,
    Aborted,
}

impl Phase {
    /// True while a submission is between the user's submit and its outcome
    pub fn is_active(&self) -> bool {
        !matches!(self, Phase::Idle | Phase::Closed | Phase::Aborted)
    }
}

/// Reasons a submission attempt ends without publishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    MissingSecretKey,
    InvalidServerUrl,
    /// The secret key is not 32 bytes of hex
    Decoding(String),
    /// The signer rejected a decoded key or the content could not be serialized
    Signing(String),
    VerificationFailure,
    Connection { url: String, reason: String },
    Publish { url: String, reason: String },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::MissingSecretKey => write!(f, "Secret key is required"),
            SubmitError::InvalidServerUrl => write!(f, "Invalid server URL"),
            SubmitError::Decoding(reason) => write!(f, "Invalid secret key: {reason}"),
            SubmitError::Signing(reason) => write!(f, "Failed to sign event: {reason}"),
            SubmitError::VerificationFailure => write!(f, "Event verification failed"),
            SubmitError::Connection { url, reason } => {
                write!(f, "Failed to connect to {url}: {reason}")
            }
            SubmitError::Publish { url, reason } => {
                write!(f, "Failed to publish to {url}: {reason}")
            }
        }
    }
}

impl Error for SubmitError {}

impl SubmitError {
    /// Errors raised after a relay connection was opened
    pub fn happened_after_connect(&self) -> bool {
        matches!(self, SubmitError::Publish { .. })
    }
}

/// Terminal result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Published {
        event_id: EventId,
        relay_url: String,
        published_at: Timestamp,
    },
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Published { .. })
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            SubmitOutcome::Published { .. } => None,
            SubmitOutcome::Failed(e) => Some(e),
        }
    }

    /// The phase the workflow rests in once this outcome is known
    pub fn terminal_phase(&self) -> Phase {
        match self {
            SubmitOutcome::Published { .. } => Phase::Closed,
            SubmitOutcome::Failed(e) if e.happened_after_connect() => Phase::Closed,
            SubmitOutcome::Failed(_) => Phase::Aborted,
        }
    }

    /// One-line summary for the status bar
    pub fn summary(&self) -> String {
        match self {
            SubmitOutcome::Published {
                event_id,
                relay_url,
                ..
            } => {
                let id = event_id.to_hex();
                format!("[Published] {} to {relay_url}", &id[..8.min(id.len())])
            }
            SubmitOutcome::Failed(e) => format!("[Failed] {e}"),
        }
    }
}

impl From<SubmitError> for SubmitOutcome {
    fn from(e: SubmitError) -> Self {
        SubmitOutcome::Failed(e)
    }
}
