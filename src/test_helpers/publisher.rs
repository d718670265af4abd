//! In-memory `EventPublisher` fakes for testing the publish pipeline.

use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::publisher::{EventPublisher, PublisherError};

/// A message captured by [`CapturingPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    /// Topic the message was published to.
    pub topic: String,

    /// Partitioning key the message was published under.
    pub key: String,

    /// Raw payload bytes.
    pub payload: Vec<u8>,
}

/// An `EventPublisher` that records every publish call.
///
/// Clones share the captured messages, so a test can hand one clone to the
/// producer and inspect the other.
#[derive(Clone, Default)]
pub struct CapturingPublisher {
    messages: Arc<Mutex<Vec<PublishedMessage>>>,
}

impl CapturingPublisher {
    /// Creates an empty capturing publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages captured so far, in publish order.
    pub async fn messages(&self) -> Vec<PublishedMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl EventPublisher for CapturingPublisher {
    async fn publish(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublisherError> {
        self.messages.lock().await.push(PublishedMessage {
            topic: topic.to_string(),
            key: key.to_string(),
            payload: payload.to_vec(),
        });

        Ok(())
    }

    async fn flush(&self, _timeout: Duration) -> Result<(), PublisherError> {
        Ok(())
    }
}

/// An `EventPublisher` whose calls always fail.
pub struct FailingPublisher;

#[async_trait::async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(
        &self,
        _topic: &str,
        _key: &str,
        _payload: &[u8],
    ) -> Result<(), PublisherError> {
        Err(PublisherError::Failed("publisher is wired to fail".to_string()))
    }

    async fn flush(&self, _timeout: Duration) -> Result<(), PublisherError> {
        Err(PublisherError::Failed("publisher is wired to fail".to_string()))
    }
}
