//! Process-wide shared client, lazily initialized and resettable.
//!
//! Exists purely to avoid rebuilding an [`ApiClient`] for every test case.
//! It is not part of the production request path; production callers build
//! their own client from an [`ApiConfig`].

use crate::client::ApiClient;
use firehydrant_core::{ApiConfig, Error, Result};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

/// Global client instance, lazily initialized
static SHARED_CLIENT: Lazy<Mutex<Option<Arc<ApiClient>>>> = Lazy::new(|| Mutex::new(None));

/// Get or initialize the shared client.
///
/// On first call, builds a client from `config`. Subsequent calls return the
/// cached instance and ignore `config` until [`reset`] is called.
///
/// # Errors
///
/// Returns a configuration error when the client cannot be built or the
/// guarding lock is poisoned.
pub fn get_or_init(config: &ApiConfig) -> Result<Arc<ApiClient>> {
    let mut guard = SHARED_CLIENT
        .lock()
        .map_err(|_| Error::configuration("Failed to acquire shared client lock"))?;

    if let Some(client) = guard.as_ref() {
        return Ok(Arc::clone(client));
    }

    let client = Arc::new(ApiClient::new(config.clone())?);
    *guard = Some(Arc::clone(&client));
    Ok(client)
}

/// Drop the shared client so the next [`get_or_init`] rebuilds it.
///
/// Intended for test teardown between runs with different configuration.
pub fn reset() {
    if let Ok(mut guard) = SHARED_CLIENT.lock() {
        *guard = None;
    }
}
