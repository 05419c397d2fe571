//! Lifecycle implementation for the on-call rotation resource.

use crate::mapper;
use crate::schema::{RotationConfig, RotationState};
use async_trait::async_trait;
use chrono::Utc;
use firehydrant_client::ApiClient;
use firehydrant_core::{ResourceLifecycle, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// On-call rotation resource bound to an API client.
///
/// Each lifecycle call operates on its own config/state pair; the client is
/// shared read-only, so instances can serve concurrent invocations for
/// different rotations without coordination.
#[derive(Debug, Clone)]
pub struct OnCallRotationResource {
    client: Arc<ApiClient>,
}

impl OnCallRotationResource {
    /// Bind the resource to an API client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceLifecycle for OnCallRotationResource {
    type Config = RotationConfig;
    type State = RotationState;

    async fn create(&self, config: &RotationConfig) -> Result<RotationState> {
        let request = mapper::build_create_request(config)?;

        info!(
            team_id = %config.team_id,
            schedule_id = %config.schedule_id,
            name = %config.name,
            "creating on-call rotation"
        );
        let rotation = self
            .client
            .create_rotation(&config.team_id, &config.schedule_id, &request)
            .await?;

        Ok(mapper::parse_response(
            &config.team_id,
            &config.schedule_id,
            &rotation,
        ))
    }

    async fn read(&self, state: &RotationState) -> Result<Option<RotationState>> {
        match self
            .client
            .get_rotation(&state.team_id, &state.schedule_id, &state.id)
            .await
        {
            Ok(rotation) => Ok(Some(mapper::parse_response(
                &state.team_id,
                &state.schedule_id,
                &rotation,
            ))),
            Err(err) if err.is_not_found() => {
                info!(rotation_id = %state.id, "rotation no longer exists, clearing state");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn update(&self, state: &RotationState, config: &RotationConfig) -> Result<RotationState> {
        let request = mapper::build_update_request(config, Utc::now())?;

        info!(
            rotation_id = %state.id,
            effective_at = %request.effective_at,
            "updating on-call rotation"
        );
        let rotation = self
            .client
            .update_rotation(&state.team_id, &state.schedule_id, &state.id, &request)
            .await?;

        Ok(mapper::parse_response(
            &state.team_id,
            &state.schedule_id,
            &rotation,
        ))
    }

    async fn delete(&self, state: &RotationState) -> Result<()> {
        match self
            .client
            .delete_rotation(&state.team_id, &state.schedule_id, &state.id)
            .await
        {
            Ok(()) => {
                info!(rotation_id = %state.id, "deleted on-call rotation");
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                debug!(rotation_id = %state.id, "rotation already deleted");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    async fn import_resource(&self, id: &str) -> Result<Option<RotationState>> {
        let import_id = mapper::parse_composite_id(id)?;

        match self
            .client
            .get_rotation(
                &import_id.team_id,
                &import_id.schedule_id,
                &import_id.rotation_id,
            )
            .await
        {
            Ok(rotation) => Ok(Some(mapper::parse_response(
                &import_id.team_id,
                &import_id.schedule_id,
                &rotation,
            ))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}
