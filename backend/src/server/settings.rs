//! Environment-driven server settings.
//!
//! `DATABASE_URL` configures the PostgreSQL store, `DATABASE_NAME` is kept
//! for diagnostics parity, and `PORT` selects the listen port.

use std::env;

use tracing::warn;

/// Listen port used when `PORT` is absent or unparsable.
pub const DEFAULT_PORT: u16 = 8000;

/// Settings consumed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// PostgreSQL connection URL; absence selects the degraded store.
    pub database_url: Option<String>,
    /// Logical database name, surfaced by diagnostics only.
    pub database_name: Option<String>,
    /// HTTP listen port.
    pub port: u16,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").ok().filter(|value| !value.is_empty());
        let database_name = env::var("DATABASE_NAME")
            .ok()
            .filter(|value| !value.is_empty());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "PORT is not a valid port number; using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        Self {
            database_url,
            database_name,
            port,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_when_environment_is_empty() {
        let _guard = lock_env([
            ("DATABASE_URL", None::<String>),
            ("DATABASE_NAME", None::<String>),
            ("PORT", None::<String>),
        ]);

        let settings = Settings::from_env();
        assert!(settings.database_url.is_none());
        assert!(settings.database_name.is_none());
        assert_eq!(settings.port, DEFAULT_PORT);
    }

    #[rstest]
    fn environment_values_are_respected() {
        let _guard = lock_env([
            (
                "DATABASE_URL",
                Some("postgres://localhost/soulful".to_owned()),
            ),
            ("DATABASE_NAME", Some("soulful".to_owned())),
            ("PORT", Some("9001".to_owned())),
        ]);

        let settings = Settings::from_env();
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/soulful")
        );
        assert_eq!(settings.database_name.as_deref(), Some("soulful"));
        assert_eq!(settings.port, 9001);
    }

    #[rstest]
    fn unparsable_port_falls_back_to_default() {
        let _guard = lock_env([
            ("DATABASE_URL", None::<String>),
            ("PORT", Some("not-a-port".to_owned())),
        ]);

        assert_eq!(Settings::from_env().port, DEFAULT_PORT);
    }
}
