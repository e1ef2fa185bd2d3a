use nostr_sdk::prelude::*;

use crate::domain::{entry::EntryList, nostr::seal_entries, submission::SubmitError};

/// Turns the table into a signed event
pub trait Signer: Send + Sync {
    fn sign(
        &self,
        entries: &EntryList,
        secret_key: &str,
        created_at: Timestamp,
    ) -> Result<Event, SubmitError>;
}

/// Signs with the hex secret key typed into the form
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySigner;

impl Signer for KeySigner {
    fn sign(
        &self,
        entries: &EntryList,
        secret_key: &str,
        created_at: Timestamp,
    ) -> Result<Event, SubmitError> {
        seal_entries(entries, secret_key, created_at)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::{entry::Entry, nostr::verify},
        test_helpers::TEST_SECRET_KEY,
    };

    #[test]
    fn test_key_signer_produces_verifiable_event() -> color_eyre::Result<()> {
        let entries = EntryList::from(vec![Entry::new("Alice", "5")]);

        let event = KeySigner.sign(&entries, TEST_SECRET_KEY, Timestamp::from(42))?;

        assert!(verify(&event));
        assert_eq!(event.content, r#"[{"name":"Alice","number":"5"}]"#);

        Ok(())
    }
}
