use nostr_sdk::prelude::*;

use crate::domain::{entry::EntryList, submission::SubmitError};

/// Kind used for published form data (a plain text note)
pub const FORM_EVENT_KIND: Kind = Kind::TextNote;

/// Decodes a 64 character hex secret key into signing keys
pub fn decode_secret_key(secret_key: &str) -> Result<Keys, SubmitError> {
    let secret_key =
        SecretKey::from_hex(secret_key).map_err(|e| SubmitError::Decoding(e.to_string()))?;
    Ok(Keys::new(secret_key))
}

/// Builds the unsigned envelope (no tags, fixed kind) and signs it
pub fn sign_content(
    content: String,
    keys: &Keys,
    created_at: Timestamp,
) -> Result<Event, SubmitError> {
    EventBuilder::new(FORM_EVENT_KIND, content)
        .custom_created_at(created_at)
        .sign_with_keys(keys)
        .map_err(|e| SubmitError::Signing(e.to_string()))
}

/// Serializes the entries and signs them with the given hex secret key
pub fn seal_entries(
    entries: &EntryList,
    secret_key: &str,
    created_at: Timestamp,
) -> Result<Event, SubmitError> {
    let content = entries
        .to_content()
        .map_err(|e| SubmitError::Signing(e.to_string()))?;
    let keys = decode_secret_key(secret_key)?;
    sign_content(content, &keys, created_at)
}

/// Checks both the event id and the signature
pub fn verify(event: &Event) -> bool {
    event.verify().is_ok()
}

pub fn ensure_verified(event: Event) -> Result<Event, SubmitError> {
    if verify(&event) {
        Ok(event)
    } else {
        Err(SubmitError::VerificationFailure)
    }
}
