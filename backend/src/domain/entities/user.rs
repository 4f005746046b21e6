//! Platform user record.

use serde::{Deserialize, Serialize};

use super::validation::ensure_email;
use crate::domain::schema::ValidationError;

/// Registered user of the platform.
///
/// No endpoint creates users today; the shape is registered so admin tooling
/// writing to the `user` collection goes through the same validation as
/// everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone / WhatsApp number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// One of `user | student | admin | partner`; not enforced as an enum.
    #[serde(default = "default_role")]
    pub role: String,
    /// Whether the account is active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_role() -> String {
    "student".to_owned()
}

fn default_active() -> bool {
    true
}

impl User {
    /// Enforce field-level rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_email(&self.email, "email")
    }
}
