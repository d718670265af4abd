//! Transport seam for publishing serialized events.

mod error;
mod kafka;
mod traits;

pub use error::PublisherError;
pub use kafka::KafkaEventPublisher;
pub use traits::EventPublisher;
