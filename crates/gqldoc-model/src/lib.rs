#![deny(clippy::all)]

//! Typed output model for the gqldoc documentation generator.
//!
//! This crate provides:
//! - The [`GeneratedFile`] descriptor naming a destination and payload for one
//!   output file of a documentation generation pass.
//! - The [`FileKind`] classification tag attached by rendering adapters.
//! - Pure path-resolution helpers used by the output writer to derive and
//!   label destinations.

pub mod model;

pub use model::{FileKind, GeneratedFile};
