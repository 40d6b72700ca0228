//! # Poolmap Common
//!
//! Shared data model and plumbing for the `poolmap` workspace.
//!
//! * **[`network`]**: Endpoints, `/24` pools and the ordered pool map.
//! * **[`config`]**: Run configuration and report template text.
//! * **[`error`]**: The error type returned by every pipeline stage.

pub mod config;
pub mod error;
pub mod network;
