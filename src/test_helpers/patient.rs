//! A builder for creating `Patient` instances for testing.

use uuid::Uuid;

use crate::models::Patient;

/// A builder for creating `Patient` instances for testing.
///
/// Defaults to a freshly generated id so each built record is distinct.
#[derive(Debug, Clone)]
pub struct PatientBuilder {
    id: Option<Uuid>,
    name: String,
    email: String,
}

impl PatientBuilder {
    /// Creates a new `PatientBuilder` with placeholder values.
    pub fn new() -> Self {
        Self {
            id: Some(Uuid::new_v4()),
            name: "Test Patient".to_string(),
            email: "patient@example.com".to_string(),
        }
    }

    /// Sets the patient id.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Clears the patient id, modeling a record that was never persisted.
    pub fn no_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Sets the patient name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the patient email address.
    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    /// Builds the `Patient` with the provided values.
    pub fn build(self) -> Patient {
        Patient { id: self.id, name: self.name, email: self.email }
    }
}

impl Default for PatientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
