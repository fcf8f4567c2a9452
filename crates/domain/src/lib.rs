//! # Domain
//!
//! Manifest model and the grouping rules that turn a one-level directory
//! snapshot into a [`model::Manifest`]. Nothing in this crate touches the
//! filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod grouping;
pub mod model;
pub mod value_objects;

pub use config::{ExtensionFilter, Variant, VariantProfile};
pub use grouping::ManifestBuilder;
pub use model::{DirectorySnapshot, FileDescriptor, Manifest, ManifestSummary, Subfolder};
