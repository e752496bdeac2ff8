// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditConfig {
    system_actor: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_system_actor() -> String {
    "system".into()
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            system_actor: default_system_actor(),
        }
    }
}

impl AuditConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `system_actor` is blank.
    pub fn new(system_actor: impl Into<String>) -> Result<Self, ConfigError> {
        let system_actor = system_actor.into();
        if system_actor.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "AUDIT_SYSTEM_ACTOR cannot be blank".into(),
            ));
        }
        Ok(Self { system_actor })
    }

    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `AUDIT_SYSTEM_ACTOR` is set but
    /// blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let system_actor = lookup("AUDIT_SYSTEM_ACTOR").unwrap_or_else(default_system_actor);
        Self::new(system_actor)
    }

    /// Actor recorded when the caller does not supply one.
    #[must_use]
    pub fn system_actor(&self) -> &str {
        &self.system_actor
    }
}
