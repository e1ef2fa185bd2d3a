use std::time::Duration;

use nostr_sdk::prelude::*;

use crate::domain::submission::{Phase, SubmitError, SubmitOutcome};

/// Default time allowed for the relay handshake
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Opens connections to a relay
pub trait RelayTransport: Send + Sync {
    fn connect<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxedFuture<'a, Result<Box<dyn RelayConnection>, SubmitError>>;
}

/// An open relay connection
pub trait RelayConnection: Send {
    fn url(&self) -> &str;

    fn publish<'a>(&'a mut self, event: &'a Event) -> BoxedFuture<'a, Result<(), SubmitError>>;

    fn close(self: Box<Self>) -> BoxedFuture<'static, ()>;
}

/// Connects, publishes once and closes.
///
/// Once the connection is open it is always closed, whatever the publish
/// result. `on_phase` is told when publishing starts.
pub async fn publish_and_close(
    transport: &dyn RelayTransport,
    url: &str,
    event: &Event,
    on_phase: impl Fn(Phase),
) -> SubmitOutcome {
    let mut connection = match transport.connect(url).await {
        Ok(connection) => connection,
        Err(e) => {
            log::error!("{e}");
            return SubmitOutcome::Failed(e);
        }
    };
    log::info!("Connected to {}", connection.url());

    on_phase(Phase::Publishing);
    let result = connection.publish(event).await;

    connection.close().await;
    log::info!("Closed connection to {url}");

    match result {
        Ok(()) => {
            log::info!("Published event {}", event.id);
            SubmitOutcome::Published {
                event_id: event.id,
                relay_url: url.to_string(),
                published_at: Timestamp::now(),
            }
        }
        Err(e) => {
            log::error!("{e}");
            SubmitOutcome::Failed(e)
        }
    }
}

/// Relay transport backed by a `nostr_sdk::Client` per connection
#[derive(Debug, Clone)]
pub struct NostrRelayTransport {
    connect_timeout: Duration,
}

impl Default for NostrRelayTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
    }
}

impl NostrRelayTransport {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl RelayTransport for NostrRelayTransport {
    fn connect<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxedFuture<'a, Result<Box<dyn RelayConnection>, SubmitError>> {
        Box::pin(async move {
            let connection_error = |reason: String| SubmitError::Connection {
                url: url.to_string(),
                reason,
            };

            // Events are signed before they reach the client, so no signer is attached
            let client = Client::default();
            client
                .add_relay(url)
                .await
                .map_err(|e| connection_error(e.to_string()))?;

            if let Err(e) = client.try_connect_relay(url, self.connect_timeout).await {
                client.shutdown().await;
                return Err(connection_error(e.to_string()));
            }

            Ok(Box::new(NostrRelayConnection {
                client,
                url: url.to_string(),
            }) as Box<dyn RelayConnection>)
        })
    }
}

struct NostrRelayConnection {
    client: Client,
    url: String,
}

impl RelayConnection for NostrRelayConnection {
    fn url(&self) -> &str {
        &self.url
    }

    fn publish<'a>(&'a mut self, event: &'a Event) -> BoxedFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            let publish_error = |reason: String| SubmitError::Publish {
                url: self.url.clone(),
                reason,
            };

            let output = self
                .client
                .send_event(event)
                .await
                .map_err(|e| publish_error(e.to_string()))?;

            if output.success.is_empty() {
                let reason = output
                    .failed
                    .values()
                    .next()
                    .cloned()
                    .unwrap_or_else(|| "relay did not accept the event".to_string());
                return Err(publish_error(reason));
            }

            Ok(())
        })
    }

    fn close(self: Box<Self>) -> BoxedFuture<'static, ()> {
        Box::pin(async move { self.client.shutdown().await })
    }
}
