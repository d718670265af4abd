//! A set of helpers for testing

mod patient;
mod publisher;

pub use patient::PatientBuilder;
pub use publisher::{CapturingPublisher, FailingPublisher, PublishedMessage};
