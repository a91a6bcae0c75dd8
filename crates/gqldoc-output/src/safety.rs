//! Pure path-safety heuristics for resolved write destinations.
//!
//! The checker operates purely on the string form of an already-resolved
//! path; no filesystem or network access occurs. It is deliberately kept in
//! one function so the stringy, platform-conditional rules stay contained
//! and auditable rather than scattered across the writer.

use std::path::{Component, Path};

use path_clean::PathClean;

/// Minimum number of named segments a write target must have. Shallow paths
/// such as `/a/b` have too much blast radius for generated output.
const MIN_PATH_SEGMENTS: usize = 3;

/// System directories that must never be write targets, matched as exact
/// paths or as segment-wise prefixes. POSIX hosts only.
#[cfg(not(windows))]
const SYSTEM_PREFIXES: &[&str] = &[
    "/etc", "/bin", "/sbin", "/usr/bin", "/usr/sbin", "/System", "/var/run", "/home", "/root",
    "/proc", "/sys", "/dev",
];

/// Decides whether a resolved absolute path is an acceptable write target.
///
/// Rejects the filesystem root, paths with fewer than
/// [`MIN_PATH_SEGMENTS`] named segments after normalization, and (on
/// non-Windows hosts) anything at or under a protected system directory.
/// Deterministic given the path and the host's path conventions.
pub fn is_safe_path(path: &Path) -> bool {
    let cleaned = path.clean();

    // The root itself has zero named segments, so this also covers rule 1.
    let segments = cleaned
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .count();
    if segments < MIN_PATH_SEGMENTS {
        return false;
    }

    #[cfg(not(windows))]
    for prefix in SYSTEM_PREFIXES {
        // Path::starts_with matches whole segments and includes equality,
        // so `/etcetera` does not match `/etc` but `/etc/foo/bar` does.
        if cleaned.starts_with(prefix) {
            return false;
        }
    }

    true
}
