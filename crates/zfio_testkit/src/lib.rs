//! # zfio Testkit
//!
//! Test utilities for zfio.
//!
//! This crate provides:
//! - Scratch directories that hand out string paths
//! - Printable payload generators, seeded and proptest-based
//! - Shared property test configuration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zfio_testkit::{printable_bytes, ScratchDir};
//!
//! #[test]
//! fn writes_somewhere() {
//!     let dir = ScratchDir::new();
//!     let path = dir.path_str("out.gz");
//!     let payload = printable_bytes(1024, 7);
//!     // ... open `path` and write `payload`
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;
