//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: one-level directory listing of a scan root
//! - [`copy`]: copying filtered files from a source tree
//! - [`output`]: persisting the rendered manifest
//! - [`progress`]: per-file progress reporting
//!
//! The use-case layer only sees these traits, so every step can be driven by
//! stubs in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod copy;
pub mod filesystem;
pub mod output;
pub mod progress;
