use nostr_sdk::prelude::*;

/// Elm-like command definitions
/// Represents side effects (relay I/O, logging, rendering)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Connect to the relay, publish the already verified event, close the connection
    PublishEvent { relay_url: String, event: Event },

    /// Request a render from the host loop
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}
