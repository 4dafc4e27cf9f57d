//! # FAT Storage Test Suite
//!
//! Cross-crate scenarios that need real backends.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks (split, create, open, modify)
//! └── src/integration/  # file-backend persistence and lifecycle scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fat-tests
//! cargo bench -p fat-tests
//! ```

pub mod integration;
