//! # Integration Scenarios
//!
//! - `persistence` - state survives closing and reopening the file backend
//! - `lifecycle` - full create/modify/delete/recover runs through `from_config`

pub mod lifecycle;
pub mod persistence;
