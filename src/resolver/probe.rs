//! Filesystem probes used by the resolver
//!
//! The resolver only needs to ask "is this a regular file" and "is this a
//! directory" about paths relative to the served root. Keeping that behind a
//! trait lets tests answer from memory instead of touching the disk.

use std::path::PathBuf;

/// Read-only existence checks on paths relative to the served root
pub trait FileProbe {
    /// Whether a regular file exists at `relative`
    fn is_file(&self, relative: &str) -> bool;

    /// Whether a directory exists at `relative`
    fn is_dir(&self, relative: &str) -> bool;
}

/// Probe backed by the real filesystem under a root directory
#[derive(Debug, Clone)]
pub struct DiskProbe {
    root: PathBuf,
}

impl DiskProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // An empty candidate would join to the root itself
    fn full_path(&self, relative: &str) -> Option<PathBuf> {
        if relative.is_empty() {
            None
        } else {
            Some(self.root.join(relative))
        }
    }
}

impl FileProbe for DiskProbe {
    fn is_file(&self, relative: &str) -> bool {
        self.full_path(relative).is_some_and(|p| p.is_file())
    }

    fn is_dir(&self, relative: &str) -> bool {
        self.full_path(relative).is_some_and(|p| p.is_dir())
    }
}
