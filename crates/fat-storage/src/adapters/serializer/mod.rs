//! Serializer Adapters
//!
//! Implementations of the `RecordSerializer` trait.

mod json;

pub use json::JsonRecordSerializer;
