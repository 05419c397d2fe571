//! API configuration sourced from explicit values or the environment.

use crate::error::{Error, Result};
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the FireHydrant API key.
pub const ENV_API_KEY: &str = "FIREHYDRANT_API_KEY";

/// Environment variable overriding the API origin.
pub const ENV_BASE_URL: &str = "FIREHYDRANT_BASE_URL";

/// Production API origin, used when no override is set.
pub const DEFAULT_BASE_URL: &str = "https://api.firehydrant.io/v1";

/// Connection settings for the FireHydrant API.
///
/// The API key is held in a [`SecretString`] so it is zeroed on drop and
/// redacted from `Debug` output.
#[derive(Clone)]
pub struct ApiConfig {
    api_key: SecretString,
    base_url: String,
}

impl ApiConfig {
    /// Create a config from explicit values.
    ///
    /// A trailing slash on `base_url` is stripped so request paths can be
    /// joined unconditionally.
    #[must_use]
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a config from the environment.
    ///
    /// `FIREHYDRANT_API_KEY` is required; `FIREHYDRANT_BASE_URL` is optional
    /// and defaults to the production origin.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the API key variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::configuration(format!("{ENV_API_KEY} environment variable not set"))
            })?;

        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_key, base_url))
    }

    /// Expose the API key for use in an Authorization header.
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// The API origin without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
