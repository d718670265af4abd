//! Wire-format definitions for patient events.
//!
//! `PatientEvent` mirrors the `patient.events.PatientEvent` protobuf message
//! consumed by downstream services. The schema is flat enough that the struct
//! is written by hand with the `prost` derive instead of being generated from
//! a `.proto` file, which keeps `protoc` out of the build; the wire bytes are
//! identical.

use thiserror::Error;

use crate::models::Patient;

/// Event type emitted when a patient record is created.
pub const PATIENT_CREATED: &str = "PATIENT_CREATED";

/// Errors that can occur while building a `PatientEvent` from a domain record.
#[derive(Debug, Clone, Error)]
pub enum EventError {
    /// The domain record carries no identifier to derive `patient_id` from.
    #[error("Patient record has no id.")]
    MissingPatientId,
}

/// A flat, immutable event describing a patient state change.
///
/// Constructed per publish call, encoded, and discarded; it has no identity
/// beyond its field values.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PatientEvent {
    /// Identifier of the patient, in canonical string form.
    #[prost(string, tag = "1")]
    pub patient_id: String,

    /// Full name of the patient.
    #[prost(string, tag = "2")]
    pub name: String,

    /// Contact email address of the patient.
    #[prost(string, tag = "3")]
    pub email: String,

    /// The kind of state change this event describes.
    #[prost(string, tag = "4")]
    pub event_type: String,
}

impl PatientEvent {
    /// Builds the `PATIENT_CREATED` event for the given record.
    ///
    /// Fails if the record has not been assigned an id yet.
    pub fn created(patient: &Patient) -> Result<Self, EventError> {
        let patient_id = patient.id.ok_or(EventError::MissingPatientId)?.to_string();

        Ok(Self {
            patient_id,
            name: patient.name.clone(),
            email: patient.email.clone(),
            event_type: PATIENT_CREATED.to_string(),
        })
    }
}
