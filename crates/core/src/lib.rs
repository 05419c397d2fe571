//! Core types for the FireHydrant provider ecosystem.
//!
//! This crate carries the pieces shared by every other crate in the
//! workspace: the error taxonomy, the API configuration sourced from the
//! environment, and the resource lifecycle trait that the plan/apply engine
//! drives.

pub mod config;
pub mod error;
pub mod resource;

pub use config::ApiConfig;
pub use error::{Error, Result};
pub use resource::ResourceLifecycle;
