pub mod connection;
pub mod entries;
pub mod submission;
pub mod system;
pub mod ui;

use crate::infrastructure::config::Config;
use connection::ConnectionState;
use entries::EntriesState;
use submission::SubmissionState;
use system::SystemState;
use ui::UiState;

/// Number of blank rows the table starts with when nothing is configured
pub const DEFAULT_INITIAL_ROWS: usize = 2;

/// Unified application state
#[derive(Debug)]
pub struct AppState {
    pub entries: EntriesState,
    pub connection: ConnectionState,
    pub submission: SubmissionState,
    pub ui: UiState,
    pub system: SystemState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            entries: EntriesState::new(DEFAULT_INITIAL_ROWS),
            connection: ConnectionState::default(),
            submission: SubmissionState::default(),
            ui: UiState::default(),
            system: SystemState::default(),
        }
    }
}

impl AppState {
    /// Initialize AppState with rows and prefilled fields taken from config
    pub fn new_with_config(config: &Config) -> Self {
        Self {
            entries: EntriesState::new(config.initial_rows),
            connection: ConnectionState::new(config.privatekey.clone(), config.relay.clone()),
            ..Default::default()
        }
    }
}
