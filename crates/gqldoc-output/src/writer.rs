//! Batched, security-validated writing of generated documentation files.
//!
//! The writer consumes one run's worth of [`GeneratedFile`] descriptors and
//! commits them to disk in three guarded phases:
//!
//! 1. A pre-flight pass proves every descriptor resolves to a distinct
//!    destination across the *entire* call, before any I/O.
//! 2. The list is split into fixed-size batches processed strictly in
//!    sequence; every descriptor in a batch is validated (safety check,
//!    containment) before any write in that batch is issued.
//! 3. Writes within a batch run concurrently and are awaited together; a
//!    destination that turns out to be a symlink is refused rather than
//!    followed.
//!
//! The operation is not globally transactional: a failure aborts the whole
//! call, but writes from earlier, already-completed batches stay on disk.
//! Callers treat any rejection as "re-run from scratch after fixing the
//! cause".

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use gqldoc_model::GeneratedFile;
use path_clean::PathClean;

use crate::error::{Result, WriteError};
use crate::safety::is_safe_path;

/// Number of files validated and written together as one batch. Bounds peak
/// open-handle usage while still overlapping I/O within a batch.
const BATCH_SIZE: usize = 20;

/// Writes a documentation run's generated files under one output directory.
///
/// Each [`write`](FileWriter::write) call is independent: all duplicate
/// tracking is call-local, so concurrent unrelated calls with different
/// output directories do not interfere.
pub struct FileWriter {
    output_dir: PathBuf,
}

impl FileWriter {
    /// Creates a writer rooted at `output_dir`. The directory is created on
    /// first write if it does not exist.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes every descriptor to disk, creating intermediate directories as
    /// needed.
    ///
    /// Fails on the first detected violation; on success every file has been
    /// durably written. See the module docs for the phase ordering and
    /// partial-failure semantics, and [`WriteError`] for the violation
    /// taxonomy.
    pub async fn write(&self, files: &[GeneratedFile]) -> Result<()> {
        let output_dir = absolutize(&self.output_dir)?;

        // Pre-flight: prove at most one writer per destination for the whole
        // call. Pure path math, runs before any filesystem access.
        let mut claimed: HashMap<PathBuf, String> = HashMap::with_capacity(files.len());
        for file in files {
            let resolved = file.resolve(&output_dir);
            if let Some(first) = claimed.insert(resolved.clone(), file.provenance()) {
                return Err(WriteError::DuplicateOutputPath {
                    path: resolved,
                    first,
                    second: file.provenance(),
                });
            }
        }

        tokio::fs::create_dir_all(&output_dir)
            .await
            .map_err(|error| WriteError::Io {
                path: output_dir.clone(),
                error,
            })?;

        for (index, batch) in files.chunks(BATCH_SIZE).enumerate() {
            tracing::trace!(batch = index, files = batch.len(), "writing output batch");

            // Validate the whole batch before issuing any of its writes, so
            // a single bad descriptor cannot leave this batch half-written.
            let mut destinations = Vec::with_capacity(batch.len());
            for file in batch {
                destinations.push(validate(&output_dir, file)?);
            }

            try_join_all(
                destinations
                    .into_iter()
                    .zip(batch)
                    .map(|(destination, file)| write_file(destination, file)),
            )
            .await?;
        }

        Ok(())
    }
}

/// Resolves one descriptor and enforces the checks its destination kind
/// requires: safety only for absolute overrides, containment plus safety
/// for output-directory-rooted paths.
fn validate(output_dir: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    let resolved = file.resolve(output_dir);

    match &file.absolute_path {
        Some(declared) => {
            // The override must itself be absolute: a relative value would
            // resolve against the process working directory, landing outside
            // the output directory with no containment check at all.
            if !declared.is_absolute() {
                return Err(WriteError::UnsafeAbsolutePath {
                    declared: declared.clone(),
                    resolved,
                });
            }
            // No containment guarantee exists for an explicit absolute
            // destination, so the safety check stands alone.
            if !is_safe_path(&resolved) {
                return Err(WriteError::UnsafeAbsolutePath {
                    declared: declared.clone(),
                    resolved,
                });
            }
        }
        None => {
            // starts_with matches whole segments and includes equality.
            if !resolved.starts_with(output_dir) {
                return Err(WriteError::PathTraversal {
                    path: file.path.clone(),
                });
            }
            if !is_safe_path(&resolved) {
                return Err(WriteError::UnsafePath { path: resolved });
            }
        }
    }

    Ok(resolved)
}

/// Commits a single validated descriptor to disk.
async fn write_file(destination: PathBuf, file: &GeneratedFile) -> Result<()> {
    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|error| WriteError::Io {
                path: parent.to_path_buf(),
                error,
            })?;
    }

    // Probe with symlink_metadata immediately before the write: an existing
    // symlink would redirect the write outside the validated destination.
    match tokio::fs::symlink_metadata(&destination).await {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            return Err(WriteError::SymlinkWriteRefused { path: destination });
        }
        Ok(_) => {}
        Err(error) if error.kind() == ErrorKind::NotFound => {}
        Err(error) => {
            return Err(WriteError::Io {
                path: destination,
                error,
            });
        }
    }

    tokio::fs::write(&destination, file.payload())
        .await
        .map_err(|error| WriteError::Io {
            path: destination.clone(),
            error,
        })?;

    tracing::debug!(path = %destination.display(), "written");
    Ok(())
}

/// Normalizes an output directory to an absolute, cleaned path so the
/// containment and safety checks always see the same form.
fn absolutize(dir: &Path) -> Result<PathBuf> {
    let cleaned = dir.clean();
    if cleaned.is_absolute() {
        return Ok(cleaned);
    }

    let current = std::env::current_dir().map_err(|error| WriteError::Io {
        path: dir.to_path_buf(),
        error,
    })?;
    Ok(current.join(cleaned).clean())
}
