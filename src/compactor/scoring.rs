//! Relevance scoring for traceback frames.
//!
//! Higher scores mean "more useful for diagnosing the failure":
//! project code beats third-party code beats stdlib, and within a tier
//! the frame closest to the raise wins.

use crate::parser::Frame;
use crate::utils::config::{
    LIBRARY_PATH_MARKERS, LIBRARY_PATH_PREFIXES, LIBRARY_PATH_SUFFIXES, NON_LIBRARY_FRAME_BONUS,
    PROJECT_FRAME_BONUS,
};
use std::path::{Component, Path, PathBuf};

/// Score a frame for selection
///
/// **Public** - used by the compactor and exposed for tuning/tests
///
/// # Arguments
/// * `frame` - Frame to score
/// * `project_root` - Optional root of the user's project
///
/// # Returns
/// `+100` for frames under `project_root`, `+10` for non-library frames,
/// plus the frame's position
pub fn frame_score(frame: &Frame, project_root: Option<&str>) -> i64 {
    let mut score = 0;

    if let Some(root) = project_root {
        if is_under_project_root(&frame.filename, root) {
            score += PROJECT_FRAME_BONUS;
        }
    }

    if !is_library_path(&frame.filename) {
        score += NON_LIBRARY_FRAME_BONUS;
    }

    score.saturating_add(i64::try_from(frame.position).unwrap_or(i64::MAX))
}

/// Classify a path as stdlib, site-packages or virtualenv code
///
/// **Public** - plain predicate over `LIBRARY_PATH_MARKERS`
pub fn is_library_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    LIBRARY_PATH_MARKERS.iter().any(|marker| path.contains(marker))
        || LIBRARY_PATH_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
        || LIBRARY_PATH_SUFFIXES
            .iter()
            .any(|suffix| path.ends_with(suffix))
}

/// Whether `filename` lies under `project_root` once both are absolutized
///
/// The comparison is a plain string prefix on the normalized forms.
/// A path that cannot be normalized never matches.
pub fn is_under_project_root(filename: &str, project_root: &str) -> bool {
    match (normalize_path(filename), normalize_path(project_root)) {
        (Some(file), Some(root)) => {
            let root = root.to_string_lossy();
            file.to_string_lossy().starts_with(&*root)
        }
        _ => false,
    }
}

/// Absolutize a path and fold `.` and `..` lexically
///
/// **Private** - never touches the filesystem beyond reading the current directory
fn normalize_path(raw: &str) -> Option<PathBuf> {
    if raw.is_empty() {
        return None;
    }

    let absolute = std::path::absolute(Path::new(raw)).ok()?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Some(normalized)
}
