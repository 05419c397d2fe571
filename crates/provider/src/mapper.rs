//! Pure mapping between the rotation schema and the wire models.
//!
//! Everything here runs before (or after) the network call and never blocks:
//! request builders validate the strategy-conditional requirements and fail
//! fast, response parsing never dereferences a nullable field without a
//! presence check, and member order is preserved exactly in both directions
//! because it is how the server assigns the rotation sequence.

use crate::schema::{
    MemberConfig, MemberState, RestrictionBlock, RotationConfig, RotationState, StrategyBlock,
};
use chrono::{DateTime, SecondsFormat, Utc};
use firehydrant_client::{
    CreateRotationRequest, Rotation, RotationMemberInput, RotationRestriction, RotationStrategy,
    RotationStrategyType, UpdateRotationRequest,
};
use firehydrant_core::{Error, Result};

/// Parsed `team_id:schedule_id:rotation_id` import identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationImportId {
    /// Owning team
    pub team_id: String,
    /// Owning schedule
    pub schedule_id: String,
    /// Rotation to import
    pub rotation_id: String,
}

/// Build the create request for a rotation configuration.
///
/// # Errors
///
/// Returns a validation error naming the missing field when the strategy's
/// conditional requirements are not met: `custom` requires `shift_duration`
/// and a rotation `start_time`; every other type requires `handoff_time`,
/// and `weekly` additionally requires `handoff_day`.
pub fn build_create_request(config: &RotationConfig) -> Result<CreateRotationRequest> {
    let strategy = build_create_strategy(config)?;

    Ok(CreateRotationRequest {
        name: config.name.clone(),
        time_zone: config.time_zone.clone(),
        description: config.description.clone(),
        color: config.color.clone(),
        slack_user_group_id: config.slack_user_group_id.clone(),
        enable_slack_channel_notifications: config.enable_slack_channel_notifications,
        prevent_shift_deletion: config.prevent_shift_deletion,
        coverage_gap_notification_interval: config.coverage_gap_notification_interval.clone(),
        start_time: config.start_time.clone(),
        members: map_members(&config.members),
        strategy,
        restrictions: map_restrictions(&config.restrictions),
    })
}

/// Build the update request for a rotation configuration.
///
/// `name`, `members`, `restrictions`, and the resolved `effective_at` are
/// always set; scalar options are set only when configured so the server
/// retains prior values. The strategy is mapped partially: only the fields
/// relevant to its type are carried, with no required-field validation.
///
/// # Errors
///
/// Returns a validation error when `effective_at` is set but not RFC 3339.
pub fn build_update_request(
    config: &RotationConfig,
    now: DateTime<Utc>,
) -> Result<UpdateRotationRequest> {
    let effective_at = resolve_effective_at(config.effective_at.as_deref(), now)?;

    Ok(UpdateRotationRequest {
        name: config.name.clone(),
        description: config.description.clone(),
        color: config.color.clone(),
        slack_user_group_id: config.slack_user_group_id.clone(),
        enable_slack_channel_notifications: config.enable_slack_channel_notifications,
        prevent_shift_deletion: config.prevent_shift_deletion,
        coverage_gap_notification_interval: config.coverage_gap_notification_interval.clone(),
        members: map_members(&config.members),
        strategy: Some(build_update_strategy(&config.strategy)),
        restrictions: map_restrictions(&config.restrictions),
        effective_at,
    })
}

/// Resolve the activation instant for an update request.
///
/// A parseable timestamp strictly in the future is used verbatim; a
/// timestamp at or before `now`, an empty value, or an absent value all
/// resolve to `now`. The result is always RFC 3339.
///
/// # Errors
///
/// Returns a validation error when the raw value is present, non-empty, and
/// not RFC 3339.
pub fn resolve_effective_at(raw: Option<&str>, now: DateTime<Utc>) -> Result<String> {
    let Some(value) = raw.filter(|value| !value.is_empty()) else {
        return Ok(format_instant(now));
    };

    let parsed = DateTime::parse_from_rfc3339(value).map_err(|e| {
        Error::validation(format!(
            "effective_at \"{value}\" is not an RFC 3339 timestamp: {e}"
        ))
    })?;

    if parsed.with_timezone(&Utc) > now {
        Ok(value.to_string())
    } else {
        Ok(format_instant(now))
    }
}

/// Project an API rotation into persisted state.
///
/// Unassigned member slots become entries with an empty `user_id` so their
/// position survives; nullable flags default to `false`; the strategy keeps
/// only the fields meaningful for its type.
#[must_use]
pub fn parse_response(team_id: &str, schedule_id: &str, rotation: &Rotation) -> RotationState {
    RotationState {
        id: rotation.id.clone(),
        team_id: team_id.to_string(),
        schedule_id: schedule_id.to_string(),
        name: rotation.name.clone(),
        time_zone: rotation.time_zone.clone().unwrap_or_default(),
        description: rotation.description.clone(),
        color: rotation.color.clone(),
        slack_user_group_id: rotation.slack_user_group_id.clone(),
        enable_slack_channel_notifications: rotation
            .enable_slack_channel_notifications
            .unwrap_or(false),
        prevent_shift_deletion: rotation.prevent_shift_deletion.unwrap_or(false),
        coverage_gap_notification_interval: rotation.coverage_gap_notification_interval.clone(),
        start_time: rotation.start_time.clone(),
        members: rotation
            .members
            .iter()
            .map(|member| MemberState {
                user_id: member.id.clone().unwrap_or_default(),
            })
            .collect(),
        strategy: rotation.strategy.as_ref().map(project_strategy),
        restrictions: rotation
            .restrictions
            .iter()
            .map(|restriction| RestrictionBlock {
                start_day: restriction.start_day.clone(),
                start_time: restriction.start_time.clone(),
                end_day: restriction.end_day.clone(),
                end_time: restriction.end_time.clone(),
            })
            .collect(),
    }
}

/// Parse a `team_id:schedule_id:rotation_id` import identifier.
///
/// # Errors
///
/// Returns a validation error naming the expected shape unless the id has
/// exactly three non-empty colon-separated segments.
pub fn parse_composite_id(id: &str) -> Result<RotationImportId> {
    let segments: Vec<&str> = id.split(':').collect();
    match segments.as_slice() {
        [team_id, schedule_id, rotation_id]
            if !team_id.is_empty() && !schedule_id.is_empty() && !rotation_id.is_empty() =>
        {
            Ok(RotationImportId {
                team_id: (*team_id).to_string(),
                schedule_id: (*schedule_id).to_string(),
                rotation_id: (*rotation_id).to_string(),
            })
        }
        _ => Err(Error::validation(format!(
            "import id \"{id}\" does not match team_id:schedule_id:rotation_id"
        ))),
    }
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Map config member slots to wire inputs, preserving order.
///
/// A present, non-empty user id becomes an assigned member; anything else
/// becomes an explicitly unassigned slot, not an omitted entry.
fn map_members(members: &[MemberConfig]) -> Vec<RotationMemberInput> {
    members
        .iter()
        .map(|member| match non_empty(member.user_id.as_deref()) {
            Some(user_id) => RotationMemberInput::assigned(user_id),
            None => RotationMemberInput::unassigned(),
        })
        .collect()
}

fn map_restrictions(restrictions: &[RestrictionBlock]) -> Vec<RotationRestriction> {
    restrictions
        .iter()
        .map(|restriction| RotationRestriction {
            start_day: restriction.start_day.clone(),
            start_time: restriction.start_time.clone(),
            end_day: restriction.end_day.clone(),
            end_time: restriction.end_time.clone(),
        })
        .collect()
}

fn build_create_strategy(config: &RotationConfig) -> Result<RotationStrategy> {
    let strategy = &config.strategy;

    if strategy.strategy_type.is_custom() {
        let shift_duration = non_empty(strategy.shift_duration.as_deref()).ok_or_else(|| {
            Error::validation("strategy type \"custom\" requires shift_duration")
        })?;
        if non_empty(config.start_time.as_deref()).is_none() {
            return Err(Error::validation(
                "strategy type \"custom\" requires the rotation start_time",
            ));
        }
        return Ok(RotationStrategy {
            strategy_type: strategy.strategy_type,
            handoff_time: None,
            handoff_day: None,
            shift_duration: Some(shift_duration.to_string()),
        });
    }

    let handoff_time = non_empty(strategy.handoff_time.as_deref()).ok_or_else(|| {
        Error::validation(format!(
            "strategy type \"{}\" requires handoff_time",
            strategy.strategy_type
        ))
    })?;
    let handoff_day = if strategy.strategy_type == RotationStrategyType::Weekly {
        let day = non_empty(strategy.handoff_day.as_deref()).ok_or_else(|| {
            Error::validation("strategy type \"weekly\" requires handoff_day")
        })?;
        Some(day.to_string())
    } else {
        None
    };

    Ok(RotationStrategy {
        strategy_type: strategy.strategy_type,
        handoff_time: Some(handoff_time.to_string()),
        handoff_day,
        shift_duration: None,
    })
}

/// Map the strategy for an update: type plus the type-relevant fields, each
/// optional.
fn build_update_strategy(strategy: &StrategyBlock) -> RotationStrategy {
    if strategy.strategy_type.is_custom() {
        RotationStrategy {
            strategy_type: strategy.strategy_type,
            handoff_time: None,
            handoff_day: None,
            shift_duration: non_empty(strategy.shift_duration.as_deref())
                .map(ToString::to_string),
        }
    } else {
        RotationStrategy {
            strategy_type: strategy.strategy_type,
            handoff_time: non_empty(strategy.handoff_time.as_deref()).map(ToString::to_string),
            handoff_day: if strategy.strategy_type == RotationStrategyType::Weekly {
                non_empty(strategy.handoff_day.as_deref()).map(ToString::to_string)
            } else {
                None
            },
            shift_duration: None,
        }
    }
}

fn project_strategy(strategy: &RotationStrategy) -> StrategyBlock {
    if strategy.strategy_type.is_custom() {
        StrategyBlock {
            strategy_type: strategy.strategy_type,
            handoff_time: None,
            handoff_day: None,
            shift_duration: strategy.shift_duration.clone(),
        }
    } else {
        StrategyBlock {
            strategy_type: strategy.strategy_type,
            handoff_time: strategy.handoff_time.clone(),
            handoff_day: if strategy.strategy_type == RotationStrategyType::Weekly {
                strategy.handoff_day.clone()
            } else {
                None
            },
            shift_duration: None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
