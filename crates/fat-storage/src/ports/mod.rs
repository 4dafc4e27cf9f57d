//! # Ports Layer
//!
//! Defines the port traits for the FAT chain storage engine.
//!
//! ## Hexagonal Architecture
//!
//! - `inbound.rs` - Driving port (the engine API consumed by drivers)
//! - `outbound.rs` - Driven ports (dependencies required by the engine)

pub mod inbound;
pub mod outbound;
