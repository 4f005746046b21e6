//! Contact form submission record.

use serde::{Deserialize, Serialize};

use super::validation::ensure_email;
use crate::domain::schema::ValidationError;

/// Message left through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Phone / WhatsApp number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactMessage {
    /// Enforce field-level rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_email(&self.email, "email")
    }
}
