//! # Nostform - Nostr data-entry form
//!
//! A terminal form that collects a table of name/number rows, signs them as a
//! Nostr text note and publishes the note to a single relay.
//!
//! ## Architecture Overview
//!
//! The crate follows an Elm-like architecture:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): functions that fold messages into state
//! - **Command** (`core::cmd`): side effects (relay I/O, logging, rendering)
//! - **View** (`presentation`): stateless rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use nostform::{
//!     core::msg::{form::FormMsg, Msg},
//!     update, AppState,
//! };
//!
//! let (state, commands) = update(Msg::Form(FormMsg::AddRow), AppState::default());
//!
//! assert_eq!(state.entries.len(), 3);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Entries, event signing and submission outcomes
//! - [`infrastructure`] - CLI, config, relay transport and terminal
//! - [`integration`] - Runtime and application loop
//! - [`presentation`] - Components and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::Runtime;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
