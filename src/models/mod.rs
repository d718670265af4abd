//! Domain models for the patient service.

mod patient;

pub use patient::Patient;
