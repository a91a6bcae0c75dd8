use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for output-writing operations.
pub type Result<T> = std::result::Result<T, WriteError>;

/// Error variants for documentation output writing.
///
/// Every variant is fatal to the `write` call that raised it: nothing is
/// retried or downgraded to a warning, and callers are expected to surface
/// the message verbatim. The messages are part of the observable contract.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Two descriptors in one write call resolve to the same destination.
    /// Detected pre-flight, before any I/O.
    #[error("duplicate output path '{path}': produced by both {first} and {second}")]
    DuplicateOutputPath {
        /// Normalized resolved destination claimed twice.
        path: PathBuf,
        /// Provenance label of the descriptor seen first.
        first: String,
        /// Provenance label of the descriptor seen second.
        second: String,
    },

    /// An explicit absolute destination failed the path safety check, or
    /// was not itself an absolute path.
    #[error("unsafe absolute path '{declared}' (resolved to '{resolved}')")]
    UnsafeAbsolutePath {
        /// Absolute destination as declared on the descriptor.
        declared: PathBuf,
        /// Destination after normalization.
        resolved: PathBuf,
    },

    /// A relative destination resolves outside the output directory.
    #[error("path traversal attempt detected: {path}")]
    PathTraversal {
        /// Offending logical relative path.
        path: String,
    },

    /// A relative destination stays inside the output directory but still
    /// fails the path safety check (too shallow, or a protected prefix
    /// reached through the output directory itself).
    #[error("unsafe path '{path}'")]
    UnsafePath {
        /// Normalized resolved destination.
        path: PathBuf,
    },

    /// The destination already exists as a symbolic link at write time.
    #[error("refusing to write through symlinked path '{path}'")]
    SymlinkWriteRefused {
        /// Destination found to be a symlink.
        path: PathBuf,
    },

    /// An underlying filesystem operation failed.
    #[error("failed to write '{path}': {error}")]
    Io {
        /// Path involved in the failing operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },
}
