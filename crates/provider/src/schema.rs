//! Configuration and state schema for the on-call rotation resource.
//!
//! [`RotationConfig`] is what the user authors; [`RotationState`] is what is
//! persisted after talking to the API. The two differ deliberately: state
//! represents an unassigned member slot as an empty `user_id` string so the
//! slot keeps its position, and it never carries `effective_at`, which is
//! write-only.

use firehydrant_client::RotationStrategyType;
use serde::{Deserialize, Serialize};

/// User-authored configuration for an on-call rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Owning team; immutable after creation
    pub team_id: String,
    /// Owning schedule; immutable after creation
    pub schedule_id: String,
    /// Rotation name
    pub name: String,
    /// IANA time zone; immutable after creation
    pub time_zone: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional display color
    #[serde(default)]
    pub color: Option<String>,
    /// Optional Slack user group kept in sync with the on-call member
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
    /// First shift start; creation-only, required by the custom strategy
    #[serde(default)]
    pub start_time: Option<String>,
    /// Activation instant for updates; write-only, never persisted
    #[serde(default)]
    pub effective_at: Option<String>,
    /// Ordered member slots; order assigns the rotation sequence
    #[serde(default)]
    pub members: Vec<MemberConfig>,
    /// Handoff strategy
    pub strategy: StrategyBlock,
    /// Ordered restriction windows
    #[serde(default)]
    pub restrictions: Vec<RestrictionBlock>,
}

impl RotationConfig {
    /// Names of the create-once fields that differ between `self` and
    /// `desired`.
    ///
    /// A non-empty result means the change cannot be applied in place; the
    /// rotation has to be destroyed and recreated.
    #[must_use]
    pub fn replacement_required(&self, desired: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.team_id != desired.team_id {
            changed.push("team_id");
        }
        if self.schedule_id != desired.schedule_id {
            changed.push("schedule_id");
        }
        if self.time_zone != desired.time_zone {
            changed.push("time_zone");
        }
        if self.start_time != desired.start_time {
            changed.push("start_time");
        }
        if self.strategy.strategy_type != desired.strategy.strategy_type {
            changed.push("strategy.type");
        }
        changed
    }
}

/// One member slot in the configuration.
///
/// A missing or empty `user_id` declares an explicitly unassigned slot; the
/// entry still occupies its position in the rotation sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberConfig {
    /// User bound to this slot
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Strategy block shared by configuration and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyBlock {
    /// Strategy kind; immutable after creation
    #[serde(rename = "type")]
    pub strategy_type: RotationStrategyType,
    /// Handoff time of day (non-custom strategies)
    #[serde(default)]
    pub handoff_time: Option<String>,
    /// Handoff day of week (weekly strategy)
    #[serde(default)]
    pub handoff_day: Option<String>,
    /// ISO8601 shift length (custom strategy)
    #[serde(default)]
    pub shift_duration: Option<String>,
}

/// Restriction window shared by configuration and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionBlock {
    /// Day the window opens
    pub start_day: String,
    /// Time of day the window opens
    pub start_time: String,
    /// Day the window closes
    pub end_day: String,
    /// Time of day the window closes
    pub end_time: String,
}

/// Persisted state of a managed rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    /// Server-assigned rotation id
    pub id: String,
    /// Owning team
    pub team_id: String,
    /// Owning schedule
    pub schedule_id: String,
    /// Rotation name
    pub name: String,
    /// IANA time zone
    pub time_zone: String,
    /// Description, when set remotely
    #[serde(default)]
    pub description: Option<String>,
    /// Display color, when set remotely
    #[serde(default)]
    pub color: Option<String>,
    /// Slack user group, when set remotely
    #[serde(default)]
    pub slack_user_group_id: Option<String>,
    /// Slack channel notification flag; a null in the response reads as off
    pub enable_slack_channel_notifications: bool,
    /// Shift deletion protection flag; a null in the response reads as off
    pub prevent_shift_deletion: bool,
    /// Coverage-gap notification interval, when set remotely
    #[serde(default)]
    pub coverage_gap_notification_interval: Option<String>,
    /// First shift start, when the rotation has one
    #[serde(default)]
    pub start_time: Option<String>,
    /// Ordered member slots; an unassigned slot has an empty `user_id`
    pub members: Vec<MemberState>,
    /// Strategy as reported by the server
    #[serde(default)]
    pub strategy: Option<StrategyBlock>,
    /// Ordered restriction windows
    pub restrictions: Vec<RestrictionBlock>,
}

/// One member slot in persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberState {
    /// User id, or the empty string for an unassigned slot
    pub user_id: String,
}
