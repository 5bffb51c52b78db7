//! Fieldkit Core Library
//!
//! This crate provides the contracts shared between a record-editing host and
//! its field implementations: per-attribute configuration, the
//! [`FieldController`] trait invoked at the host's lifecycle points, and the
//! partial-update payload type carrying the omission-vs-null wire semantics.

pub mod config;
pub mod controller;
pub mod update;

// Re-export commonly used types
pub use config::FieldConfig;
pub use controller::FieldController;
pub use update::{merge_updates, UpdatePayload};
