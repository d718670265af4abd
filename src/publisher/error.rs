//! Error types for event publishers.

use thiserror::Error;

/// Errors returned by an `EventPublisher` transport.
#[derive(Debug, Error)]
pub enum PublisherError {
    /// Kafka error
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// The transport rejected or failed to deliver a message.
    #[error("Publish failed: {0}")]
    Failed(String),
}
