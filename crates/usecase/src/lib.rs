//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: [`BuildManifest`], [`CopySources`] and the
//!   [`GenerateManifest`] pipeline that chains them with persistence
//! - [`dto`]: request and result types at the use-case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{GenerateOutput, GenerateRequest, Outcome};
pub use orchestrator::{BuildManifest, CopySources, GenerateManifest, render_manifest};
