//! Declarative on-call rotation resource for the FireHydrant API.
//!
//! Translates between the user-authored rotation configuration, the wire
//! models of [`firehydrant_client`], and the persisted resource state. The
//! mapping is pure and validated before any request leaves the process; the
//! lifecycle implementation in [`resource`] wires it to the API client.

pub mod mapper;
pub mod resource;
pub mod schema;

pub use resource::OnCallRotationResource;
pub use schema::{
    MemberConfig, MemberState, RestrictionBlock, RotationConfig, RotationState, StrategyBlock,
};
