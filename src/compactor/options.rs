//! Caller-supplied options for compaction.

use crate::utils::config::DEFAULT_MAX_FRAMES;

/// Compaction configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactOptions {
    /// Upper bound on frames rendered per block
    pub max_frames: usize,

    /// Path whose frames are treated as the user's own code
    pub project_root: Option<String>,
}

impl Default for CompactOptions {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            project_root: None,
        }
    }
}

impl CompactOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn with_project_root(mut self, project_root: impl Into<String>) -> Self {
        self.project_root = Some(project_root.into());
        self
    }

    /// Project root, ignoring an empty string
    pub fn project_root(&self) -> Option<&str> {
        self.project_root.as_deref().filter(|root| !root.is_empty())
    }
}
