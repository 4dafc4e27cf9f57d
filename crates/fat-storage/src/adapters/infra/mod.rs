//! Infrastructure Adapters
//!
//! Implementations of infrastructure traits (Time, Key generation).

mod keygen;
mod time;

pub use keygen::UuidKeyGenerator;
pub use time::SystemTimeSource;
