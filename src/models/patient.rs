//! This module defines the `Patient` domain record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A patient record as held by the patient service.
///
/// The identifier is assigned when the record is persisted, so a record that
/// has not been stored yet carries no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier of the patient, if already persisted.
    pub id: Option<Uuid>,

    /// Full name of the patient.
    pub name: String,

    /// Contact email address of the patient.
    pub email: String,
}
