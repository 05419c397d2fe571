//! Wire models for the rotation endpoints.
//!
//! Presence semantics differ per field and per direction, and the serde
//! attributes encode that contract:
//!
//! - `Option` with `skip_serializing_if` means "set only if present": the
//!   server keeps its current value when the field is omitted;
//! - plain `Option` (serialized as `null`) means explicit absence: an
//!   unassigned member slot is sent as `"user_id": null`, never dropped;
//! - plain `Vec` means "always set, possibly empty": an empty list clears
//!   the server-side list.

use serde::{Deserialize, Serialize};

/// Handoff strategy kind for a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategyType {
    /// Responsibility hands off once a day
    Daily,
    /// Responsibility hands off once a week, on `handoff_day`
    Weekly,
    /// Shifts of a caller-chosen duration starting at the rotation start time
    Custom,
}

impl RotationStrategyType {
    /// Whether this is the custom-duration strategy.
    #[must_use]
    pub fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl std::fmt::Display for RotationStrategyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Strategy block exchanged with the API.
///
/// Which optional fields are meaningful depends on the type: `handoff_time`
/// for the non-custom strategies, additionally `handoff_day` for weekly,
/// `shift_duration` for custom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationStrategy {
    /// Strategy kind
    #[serde(rename = "type")]
    pub strategy_type: RotationStrategyType,

    /// Time of day responsibility hands off (non-custom strategies)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handoff_time: Option<String>,

    /// Day of week responsibility hands off (weekly strategy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handoff_day: Option<String>,

    /// ISO8601 shift length (custom strategy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_duration: Option<String>,
}

/// Member entry in a create/update request.
///
/// `user_id` is serialized even when `None`: an explicitly unassigned slot
/// is part of the rotation sequence and must keep its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationMemberInput {
    /// User bound to this slot, or `None` for an unassigned slot
    pub user_id: Option<String>,
}

impl RotationMemberInput {
    /// A slot assigned to the given user.
    #[must_use]
    pub fn assigned(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// An explicitly unassigned slot.
    #[must_use]
    pub fn unassigned() -> Self {
        Self { user_id: None }
    }
}

/// Member entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationMember {
    /// User id, absent for an unassigned slot
    #[serde(default)]
    pub id: Option<String>,
    /// Display name, when the server includes one
    #[serde(default)]
    pub name: Option<String>,
}

/// Recurring weekly window during which the rotation is restricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationRestriction {
    /// Day the window opens
    pub start_day: String,
    /// Time of day the window opens
    pub start_time: String,
    /// Day the window closes
    pub end_day: String,
    /// Time of day the window closes
    pub end_time: String,
}

/// Rotation as returned by the API.
///
/// Every field the server may omit or null is an `Option`; readers must
/// check presence rather than assume a value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rotation {
    /// Server-assigned rotation id
    pub id: String,
    /// Rotation name
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// IANA time zone the rotation is evaluated in
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Display color
    #[serde(default)]
    pub color: Option<String>,
    /// Slack user group kept in sync with the on-call member
    #[serde(default)]
    pub slack_user_group_id: Option<String>,
    /// Whether handoff notifications go to the team Slack channel
    #[serde(default)]
    pub enable_slack_channel_notifications: Option<bool>,
    /// Whether occupied shifts are protected from deletion
    #[serde(default)]
    pub prevent_shift_deletion: Option<bool>,
    /// ISO8601 interval for coverage-gap notifications
    #[serde(default)]
    pub coverage_gap_notification_interval: Option<String>,
    /// First shift start, present for custom strategies
    #[serde(default)]
    pub start_time: Option<String>,
    /// Ordered member slots
    #[serde(default)]
    pub members: Vec<RotationMember>,
    /// Handoff strategy
    #[serde(default)]
    pub strategy: Option<RotationStrategy>,
    /// Ordered restriction windows
    #[serde(default)]
    pub restrictions: Vec<RotationRestriction>,
}

/// Request body for creating a rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRotationRequest {
    /// Rotation name
    pub name: String,
    /// IANA time zone
    pub time_zone: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional display color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Optional Slack user group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_user_group_id: Option<String>,
    /// Slack channel notification toggle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_slack_channel_notifications: Option<bool>,
    /// Shift deletion protection toggle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_shift_deletion: Option<bool>,
    /// Coverage-gap notification interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_gap_notification_interval: Option<String>,
    /// First shift start, required by the custom strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Ordered member slots; order assigns the rotation sequence
    pub members: Vec<RotationMemberInput>,
    /// Handoff strategy
    pub strategy: RotationStrategy,
    /// Restriction windows
    pub restrictions: Vec<RotationRestriction>,
}

/// Request body for updating a rotation.
///
/// `members` and `restrictions` are always serialized, including when empty,
/// so that removing every entry is expressible. The scalar options are
/// serialized only when present so the server retains prior values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRotationRequest {
    /// Rotation name, always sent
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional display color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Optional Slack user group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_user_group_id: Option<String>,
    /// Slack channel notification toggle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_slack_channel_notifications: Option<bool>,
    /// Shift deletion protection toggle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_shift_deletion: Option<bool>,
    /// Coverage-gap notification interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_gap_notification_interval: Option<String>,
    /// Ordered member slots, always sent
    pub members: Vec<RotationMemberInput>,
    /// Partial strategy update, sent only when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<RotationStrategy>,
    /// Restriction windows, always sent
    pub restrictions: Vec<RotationRestriction>,
    /// Resolved activation instant, RFC 3339, always sent
    pub effective_at: String,
}
