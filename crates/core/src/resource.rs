//! Lifecycle seam between resource implementations and the plan/apply engine.

use crate::error::Result;
use async_trait::async_trait;

/// CRUD lifecycle of a declaratively managed remote resource.
///
/// Each invocation operates on an independent config/state pair; no locking
/// is required inside an implementation. Implementations must uphold the
/// shared 404 contract:
///
/// - [`read`](Self::read) returns `Ok(None)` when the remote resource no
///   longer exists, so the engine can clear its state instead of failing;
/// - [`delete`](Self::delete) treats an already-deleted resource as success.
#[async_trait]
pub trait ResourceLifecycle {
    /// User-authored configuration for the resource.
    type Config: Send + Sync;
    /// Persisted state mirroring the remote object.
    type State: Send + Sync;

    /// Create the remote resource and return its initial state.
    async fn create(&self, config: &Self::Config) -> Result<Self::State>;

    /// Refresh state from the remote resource.
    ///
    /// Returns `Ok(None)` when the resource is gone.
    async fn read(&self, state: &Self::State) -> Result<Option<Self::State>>;

    /// Apply configuration changes to the remote resource.
    async fn update(&self, state: &Self::State, config: &Self::Config) -> Result<Self::State>;

    /// Delete the remote resource. Idempotent: deleting an already-deleted
    /// resource succeeds.
    async fn delete(&self, state: &Self::State) -> Result<()>;

    /// Look up a resource from an import identifier.
    ///
    /// Returns `Ok(None)` when the identifier parses but the resource does
    /// not exist.
    async fn import_resource(&self, id: &str) -> Result<Option<Self::State>>;
}
