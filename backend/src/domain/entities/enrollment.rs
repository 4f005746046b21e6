//! Program enrollment request record.

use serde::{Deserialize, Serialize};

use super::validation::ensure_email;
use crate::domain::schema::ValidationError;

/// Request to join a training program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Applicant name.
    pub name: String,
    /// Applicant email address.
    pub email: String,
    /// Phone / WhatsApp number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Program tag, e.g. `tilawah`, `workshop`, `webinar`, `membership`.
    pub program: String,
    /// Preferred time or event reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Free-form notes from the applicant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Enrollment {
    /// Enforce field-level rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_email(&self.email, "email")
    }
}
