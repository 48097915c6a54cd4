//! Credential resolution: an optional override key backed by a [`KeySource`].

mod source;

use std::sync::Arc;

pub use source::{EnvSource, KeySource, NoSource, StaticSource};

use crate::domain::ApiKey;

/// Environment variable consulted when no override key is set.
pub const API_KEY_ENV: &str = "ALERTY_ACM_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Errors returned by [`Credentials::resolve_key`].
pub enum CredentialError {
    /// Neither the override nor the key source produced a non-empty key.
    #[error("{env_var} is not set")]
    Missing { env_var: &'static str },
}

/// Resolution chain for the API key.
///
/// Precedence: the override set through [`Credentials::set_key`], then
/// [`API_KEY_ENV`] from the key source. Empty values at either step count as
/// absent. Nothing is cached; every [`Credentials::resolve_key`] call re-reads
/// the source.
#[derive(Debug, Clone)]
pub struct Credentials {
    override_key: Option<ApiKey>,
    source: Arc<dyn KeySource>,
}

impl Credentials {
    /// Resolve against the process environment.
    pub fn from_env() -> Self {
        Self::with_source(EnvSource)
    }

    /// Resolve against a custom key source.
    pub fn with_source(source: impl KeySource + 'static) -> Self {
        Self {
            override_key: None,
            source: Arc::new(source),
        }
    }

    /// Replace the key source, keeping any override.
    pub fn set_source(&mut self, source: impl KeySource + 'static) {
        self.source = Arc::new(source);
    }

    /// Replace the override key. The value is not validated.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.override_key = Some(ApiKey::new(key));
    }

    /// Clear the override key, falling back to the key source.
    pub fn unset_key(&mut self) {
        self.override_key = None;
    }

    /// The override key, if one is set (it may be empty).
    pub fn override_key(&self) -> Option<&ApiKey> {
        self.override_key.as_ref()
    }

    /// Resolve the effective API key.
    ///
    /// Errors:
    /// - [`CredentialError::Missing`] when neither step yields a non-empty key.
    pub fn resolve_key(&self) -> Result<ApiKey, CredentialError> {
        if let Some(key) = self.override_key.as_ref().filter(|key| !key.is_empty()) {
            tracing::debug!("api key resolved from override");
            return Ok(key.clone());
        }

        match self.source.get(API_KEY_ENV) {
            Some(value) if !value.is_empty() => {
                tracing::debug!(env_var = API_KEY_ENV, "api key resolved from key source");
                Ok(ApiKey::new(value))
            }
            _ => Err(CredentialError::Missing {
                env_var: API_KEY_ENV,
            }),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::from_env()
    }
}
