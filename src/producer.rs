//! The patient event producer.
//!
//! [`PatientEventProducer`] is the boundary between the patient service and
//! the message transport: it maps a domain record to a wire event, encodes
//! it, and submits it to the fixed patient topic. Publishing is best-effort
//! and at-most-once. Every failure, whether in event construction or in the
//! transport, is caught here, logged at error severity, and dropped, so a
//! caller can never observe a publish failure.

use std::time::Duration;

use prost::Message;

use crate::{
    events::PatientEvent,
    models::Patient,
    publisher::{EventPublisher, PublisherError},
};

/// The Kafka topic patient lifecycle events are published to.
pub const PATIENT_TOPIC: &str = "patient";

/// Publishes patient lifecycle events through an injected transport.
pub struct PatientEventProducer {
    publisher: Box<dyn EventPublisher>,
}

impl PatientEventProducer {
    /// Creates a new producer on top of the given transport.
    pub fn new(publisher: Box<dyn EventPublisher>) -> Self {
        Self { publisher }
    }

    /// Publishes a `PATIENT_CREATED` event for the given record.
    ///
    /// One message is submitted per call, keyed by the patient id for
    /// partition affinity. Failures end at this boundary as an error-level
    /// log line; there is no retry and no dead-letter path.
    pub async fn publish_created(&self, patient: &Patient) {
        let event = match PatientEvent::created(patient) {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    name = %patient.name,
                    email = %patient.email,
                    "Failed to build PATIENT_CREATED event."
                );
                return;
            }
        };

        tracing::info!(
            patient_id = %event.patient_id,
            name = %event.name,
            email = %event.email,
            event_type = %event.event_type,
            "Producing patient event."
        );

        let payload = event.encode_to_vec();

        if let Err(e) = self.publisher.publish(PATIENT_TOPIC, &event.patient_id, &payload).await {
            tracing::error!(error = %e, event = ?event, "Failed to publish PATIENT_CREATED event.");
        }
    }

    /// Flushes the transport's internal queue, waiting up to five seconds.
    ///
    /// Short-lived processes call this before exit so events still queued by
    /// the fire-and-forget transport are not lost.
    pub async fn shutdown(&self) -> Result<(), PublisherError> {
        self.publisher.flush(Duration::from_secs(5)).await
    }
}
