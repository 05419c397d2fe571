//! Typed HTTP client for the FireHydrant on-call rotation API.
//!
//! Wraps `reqwest` with the rotation CRUD operations, the wire-model structs
//! they exchange, and a lazily-initialized shared client used to deduplicate
//! setup across test invocations.
//!
//! Every response status is classified before decoding: 404 becomes the
//! [`Error::NotFound`](firehydrant_core::Error::NotFound) signal, any other
//! non-success status becomes an API error carrying the response body
//! verbatim.

pub mod client;
pub mod models;
pub mod shared;

pub use client::ApiClient;
pub use models::{
    CreateRotationRequest, Rotation, RotationMember, RotationMemberInput, RotationRestriction,
    RotationStrategy, RotationStrategyType, UpdateRotationRequest,
};
