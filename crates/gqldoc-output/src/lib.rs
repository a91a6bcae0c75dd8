#![deny(clippy::all)]

//! Hardened output writing for generated documentation.
//!
//! The documentation pipeline hands this crate a list of
//! [`GeneratedFile`](gqldoc_model::GeneratedFile) descriptors and an output
//! directory; everything between that list and the bytes on disk lives here:
//!
//! - [`safety::is_safe_path`] — a pure predicate deciding whether a resolved
//!   absolute path is an acceptable write target at all.
//! - [`writer::FileWriter`] — deduplicates destinations across the whole
//!   call, partitions work into fixed-size batches, validates every file in
//!   a batch before committing any write in it, and refuses to write through
//!   symlinked destinations.
//!
//! Any violation fails the entire call; partially generated documentation
//! sets are considered worse than no output.

pub mod error;
pub mod safety;
pub mod writer;

#[cfg(feature = "logging")]
pub mod logging;

pub use error::{Result, WriteError};
pub use safety::is_safe_path;
pub use writer::FileWriter;

#[cfg(feature = "logging")]
pub use logging::{LogLevel, init_logging, init_logging_from_env};
