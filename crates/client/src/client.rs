//! Rotation CRUD operations against the FireHydrant REST API.

use crate::models::{CreateRotationRequest, Rotation, UpdateRotationRequest};
use firehydrant_core::{ApiConfig, Error, Result};
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("firehydrant-provider/", env!("CARGO_PKG_VERSION"));

/// Typed client for the rotation endpoints.
///
/// All operations are scoped by the owning team and schedule. The client is
/// cheap to clone and safe to share; it holds no mutable state beyond the
/// connection pool inside `reqwest`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the underlying HTTP client cannot
    /// be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// The configured API origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    fn rotations_path(team_id: &str, schedule_id: &str) -> String {
        format!("/teams/{team_id}/on_call_schedules/{schedule_id}/rotations")
    }

    fn rotation_path(team_id: &str, schedule_id: &str, rotation_id: &str) -> String {
        format!(
            "{}/{rotation_id}",
            Self::rotations_path(team_id, schedule_id)
        )
    }

    /// Verify the configured credentials against the API.
    ///
    /// # Errors
    ///
    /// Returns an API error when the key is rejected or the origin is
    /// unreachable.
    pub async fn ping(&self) -> Result<()> {
        let builder = self.http.get(self.endpoint("/ping"));
        self.dispatch("ping", "endpoint", "/ping", builder).await?;
        Ok(())
    }

    /// Create a rotation on a schedule.
    pub async fn create_rotation(
        &self,
        team_id: &str,
        schedule_id: &str,
        request: &CreateRotationRequest,
    ) -> Result<Rotation> {
        debug!(team_id, schedule_id, name = %request.name, "creating rotation");

        let operation = format!("create rotation in schedule {schedule_id}");
        let builder = self
            .http
            .post(self.endpoint(&Self::rotations_path(team_id, schedule_id)))
            .json(request);
        let response = self
            .dispatch(&operation, "schedule", schedule_id, builder)
            .await?;
        Self::decode(&operation, response).await
    }

    /// Fetch a rotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the rotation no longer exists.
    pub async fn get_rotation(
        &self,
        team_id: &str,
        schedule_id: &str,
        rotation_id: &str,
    ) -> Result<Rotation> {
        debug!(team_id, schedule_id, rotation_id, "fetching rotation");

        let operation = format!("read rotation {rotation_id}");
        let builder = self
            .http
            .get(self.endpoint(&Self::rotation_path(team_id, schedule_id, rotation_id)));
        let response = self
            .dispatch(&operation, "rotation", rotation_id, builder)
            .await?;
        Self::decode(&operation, response).await
    }

    /// Update a rotation.
    pub async fn update_rotation(
        &self,
        team_id: &str,
        schedule_id: &str,
        rotation_id: &str,
        request: &UpdateRotationRequest,
    ) -> Result<Rotation> {
        debug!(
            team_id,
            schedule_id,
            rotation_id,
            effective_at = %request.effective_at,
            "updating rotation"
        );

        let operation = format!("update rotation {rotation_id}");
        let builder = self
            .http
            .patch(self.endpoint(&Self::rotation_path(team_id, schedule_id, rotation_id)))
            .json(request);
        let response = self
            .dispatch(&operation, "rotation", rotation_id, builder)
            .await?;
        Self::decode(&operation, response).await
    }

    /// Delete a rotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the rotation is already gone; callers
    /// treat that as success.
    pub async fn delete_rotation(
        &self,
        team_id: &str,
        schedule_id: &str,
        rotation_id: &str,
    ) -> Result<()> {
        debug!(team_id, schedule_id, rotation_id, "deleting rotation");

        let operation = format!("delete rotation {rotation_id}");
        let builder = self
            .http
            .delete(self.endpoint(&Self::rotation_path(team_id, schedule_id, rotation_id)));
        self.dispatch(&operation, "rotation", rotation_id, builder)
            .await?;
        Ok(())
    }

    /// Send a request and classify the response status.
    ///
    /// 404 becomes the NotFound signal for the addressed resource; any other
    /// non-success status becomes an API error with the response body
    /// attached verbatim.
    async fn dispatch(
        &self,
        operation: &str,
        resource: &str,
        id: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        let response = builder
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.api_key()),
            )
            .send()
            .await
            .map_err(|e| Error::api(operation, None, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::not_found(resource, id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.to_string()
            } else {
                body
            };
            warn!(%status, operation, "API request failed");
            return Err(Error::api(operation, Some(status.as_u16()), message));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(operation: &str, response: reqwest::Response) -> Result<T> {
        response.json().await.map_err(|e| {
            Error::api(operation, None, format!("failed to decode response body: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_paths_are_scoped_by_team_and_schedule() {
        assert_eq!(
            ApiClient::rotations_path("team-1", "sched-1"),
            "/teams/team-1/on_call_schedules/sched-1/rotations"
        );
        assert_eq!(
            ApiClient::rotation_path("team-1", "sched-1", "rot-1"),
            "/teams/team-1/on_call_schedules/sched-1/rotations/rot-1"
        );
    }

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        let client = ApiClient::new(ApiConfig::new("key", "https://api.example.com/v1/")).unwrap();
        assert_eq!(client.endpoint("/ping"), "https://api.example.com/v1/ping");
    }
}
