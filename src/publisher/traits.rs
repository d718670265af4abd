use std::time::Duration;

use super::PublisherError;

/// A trait representing an event publisher that can deliver serialized events
/// to a messaging system.
///
/// The production implementation is [`super::KafkaEventPublisher`]; tests
/// inject in-memory fakes through the same seam.
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a payload to the specified topic under the given key.
    ///
    /// Keys carry no delivery guarantee; they exist for partition affinity.
    async fn publish(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublisherError>;

    /// Flush any buffered events, waiting up to the specified timeout for
    /// completion. Short-lived processes call this before exit so queued
    /// events are not dropped.
    async fn flush(&self, timeout: Duration) -> Result<(), PublisherError>;
}
