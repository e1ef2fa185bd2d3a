//! Test doubles shared by unit and integration tests

use std::sync::Arc;
use std::time::Duration;

use nostr_sdk::prelude::*;
use ratatui::buffer::Buffer;
use tokio::sync::Mutex;

use crate::{
    core::signer::{KeySigner, Signer},
    domain::{entry::EntryList, submission::SubmitError},
    infrastructure::relay::{RelayConnection, RelayTransport},
};

/// A valid 32-byte hex secret key for tests
pub const TEST_SECRET_KEY: &str =
    "6b911fd37cdf5c81d4c0adb1ab7fa822ed253ab0ad9aa18d77257c88b29b718e";

/// Rendered rows of a buffer, one String per line
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Signs correctly, then swaps the content so the signature no longer matches
#[derive(Debug, Clone, Copy, Default)]
pub struct TamperingSigner;

impl Signer for TamperingSigner {
    fn sign(
        &self,
        entries: &EntryList,
        secret_key: &str,
        created_at: Timestamp,
    ) -> Result<Event, SubmitError> {
        let mut event = KeySigner.sign(entries, secret_key, created_at)?;
        event.content = r#"[{"name":"Mallory","number":"9"}]"#.to_string();
        Ok(event)
    }
}

/// One observed interaction with the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayCall {
    Connect(String),
    Publish(EventId),
    Close,
}

#[derive(Debug, Default)]
struct Journal {
    calls: Vec<RelayCall>,
    published: Vec<Event>,
}

/// In-memory relay transport that records every call
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    journal: Arc<Mutex<Journal>>,
    connect_error: Option<String>,
    publish_error: Option<String>,
    publish_delay: Option<Duration>,
}

impl RecordingTransport {
    pub fn failing_connect(reason: &str) -> Self {
        Self {
            connect_error: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_publish(reason: &str) -> Self {
        Self {
            publish_error: Some(reason.to_string()),
            ..Default::default()
        }
    }

    /// Holds every publish for `delay` before answering
    pub fn with_publish_delay(mut self, delay: Duration) -> Self {
        self.publish_delay = Some(delay);
        self
    }

    pub async fn calls(&self) -> Vec<RelayCall> {
        self.journal.lock().await.calls.clone()
    }

    pub async fn published(&self) -> Vec<Event> {
        self.journal.lock().await.published.clone()
    }

    pub async fn connect_count(&self) -> usize {
        self.calls()
            .await
            .iter()
            .filter(|call| matches!(call, RelayCall::Connect(_)))
            .count()
    }
}

impl RelayTransport for RecordingTransport {
    fn connect<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxedFuture<'a, Result<Box<dyn RelayConnection>, SubmitError>> {
        Box::pin(async move {
            self.journal
                .lock()
                .await
                .calls
                .push(RelayCall::Connect(url.to_string()));

            if let Some(reason) = &self.connect_error {
                return Err(SubmitError::Connection {
                    url: url.to_string(),
                    reason: reason.clone(),
                });
            }

            Ok(Box::new(RecordingConnection {
                url: url.to_string(),
                transport: self.clone(),
            }) as Box<dyn RelayConnection>)
        })
    }
}

struct RecordingConnection {
    url: String,
    transport: RecordingTransport,
}

impl RelayConnection for RecordingConnection {
    fn url(&self) -> &str {
        &self.url
    }

    fn publish<'a>(&'a mut self, event: &'a Event) -> BoxedFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            if let Some(delay) = self.transport.publish_delay {
                tokio::time::sleep(delay).await;
            }

            let mut journal = self.transport.journal.lock().await;
            journal.calls.push(RelayCall::Publish(event.id));

            match &self.transport.publish_error {
                Some(reason) => Err(SubmitError::Publish {
                    url: self.url.clone(),
                    reason: reason.clone(),
                }),
                None => {
                    journal.published.push(event.clone());
                    Ok(())
                }
            }
        })
    }

    fn close(self: Box<Self>) -> BoxedFuture<'static, ()> {
        Box::pin(async move {
            self.transport.journal.lock().await.calls.push(RelayCall::Close);
        })
    }
}
