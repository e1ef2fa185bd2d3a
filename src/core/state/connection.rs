use secrecy::{ExposeSecret, SecretString};

use crate::{
    core::{cmd::Cmd, msg::form::FormMsg},
    domain::submission::INVALID_SERVER_URL_MESSAGE,
};

const URL_SCHEMES: [&str; 2] = ["ws://", "wss://"];

/// Returns true iff `url` uses a WebSocket scheme. No reachability check.
pub fn validate_server_url(url: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// Error message for `url`, if any
pub fn server_url_error(url: &str) -> Option<&'static str> {
    if validate_server_url(url) {
        None
    } else {
        Some(INVALID_SERVER_URL_MESSAGE)
    }
}

/// Secret key and relay URL fields
///
/// The URL error is derived from the current URL whenever it is read, so it
/// cannot go stale. It is hidden until the URL has been edited or validated.
#[derive(Debug)]
pub struct ConnectionState {
    secret_key: SecretString,
    server_url: String,
    url_touched: bool,
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self {
            secret_key: SecretString::from(String::new()),
            server_url: String::new(),
            url_touched: false,
        }
    }
}

impl ConnectionState {
    pub fn new(secret_key: String, server_url: String) -> Self {
        let url_touched = !server_url.is_empty();
        Self {
            secret_key: SecretString::from(secret_key),
            server_url,
            url_touched,
        }
    }

    pub fn set_secret_key(&mut self, value: String) {
        self.secret_key = SecretString::from(value);
    }

    pub fn set_server_url(&mut self, value: String) {
        self.server_url = value;
        self.url_touched = true;
    }

    pub fn expose_secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }

    pub fn has_secret_key(&self) -> bool {
        !self.secret_key.expose_secret().is_empty()
    }

    /// Number of characters typed into the secret key field, for masking
    pub fn secret_key_len(&self) -> usize {
        self.secret_key.expose_secret().chars().count()
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Runs the scheme check against the current URL and makes its error visible
    pub fn validate(&mut self) -> bool {
        self.url_touched = true;
        validate_server_url(&self.server_url)
    }

    /// Inline message shown under the URL field
    pub fn url_error(&self) -> Option<&'static str> {
        if self.url_touched {
            server_url_error(&self.server_url)
        } else {
            None
        }
    }

    /// Connection-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FormMsg) -> Vec<Cmd> {
        match msg {
            FormMsg::SetSecretKey(value) => self.set_secret_key(value),
            FormMsg::SetServerUrl(value) => self.set_server_url(value),
            FormMsg::AddRow | FormMsg::SetName(..) | FormMsg::SetNumber(..) => {}
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ws://relay.example.com")]
    #[case("wss://relay.example.com")]
    #[case("ws://")]
    #[case("wss://127.0.0.1:7777/path?x=1")]
    fn test_validate_accepts_websocket_schemes(#[case] url: &str) {
        assert!(validate_server_url(url));
        assert_eq!(server_url_error(url), None);
    }

    #[rstest]
    #[case("")]
    #[case("http://relay.example.com")]
    #[case("https://relay.example.com")]
    #[case("relay.example.com")]
    #[case("WSS://relay.example.com")]
    #[case(" wss://relay.example.com")]
    #[case("ws:/relay.example.com")]
    fn test_validate_rejects_other_urls(#[case] url: &str) {
        assert!(!validate_server_url(url));
        assert_eq!(server_url_error(url), Some(INVALID_SERVER_URL_MESSAGE));
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let state = ConnectionState::default();

        assert_eq!(state.url_error(), None);
    }

    #[test]
    fn test_set_server_url_recomputes_error() {
        let mut state = ConnectionState::default();

        state.set_server_url("http://relay.example.com".into());
        assert_eq!(state.url_error(), Some(INVALID_SERVER_URL_MESSAGE));

        state.set_server_url("wss://relay.example.com".into());
        assert_eq!(state.url_error(), None);
    }

    #[test]
    fn test_validate_makes_error_visible() {
        let mut state = ConnectionState::default();

        assert!(!state.validate());
        assert_eq!(state.url_error(), Some(INVALID_SERVER_URL_MESSAGE));
    }

    #[test]
    fn test_secret_key_is_stored_raw_and_redacted_in_debug() {
        let mut state = ConnectionState::default();
        assert!(!state.has_secret_key());

        state.set_secret_key("not even hex".into());

        assert!(state.has_secret_key());
        assert_eq!(state.expose_secret_key(), "not even hex");
        assert_eq!(state.secret_key_len(), 12);
        assert!(!format!("{state:?}").contains("not even hex"));
    }

    #[test]
    fn test_new_prefilled_url_is_validated() {
        let state = ConnectionState::new(String::new(), "http://x".into());

        assert_eq!(state.url_error(), Some(INVALID_SERVER_URL_MESSAGE));
    }
}
