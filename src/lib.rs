#![warn(missing_docs)]
//! Publishes patient lifecycle events from the patient service to Kafka.
//!
//! A [`models::Patient`] record is mapped to a flat [`events::PatientEvent`],
//! encoded as protobuf, and handed to an [`publisher::EventPublisher`] under a
//! fixed topic. Publishing is best-effort and at-most-once: failures are
//! logged and never surfaced to the caller.

pub mod config;
pub mod events;
pub mod models;
pub mod producer;
pub mod publisher;
pub mod test_helpers;
