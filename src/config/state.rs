// Application state module
// Read-only state shared by every request handler

use std::path::PathBuf;

use super::types::Config;
use crate::resolver::DiskProbe;

/// Application state
///
/// Built once at startup and never mutated, so handlers running on
/// different connections share it without locking.
pub struct AppState {
    pub config: Config,
    /// Canonical served root
    pub root: PathBuf,
    pub probe: DiskProbe,
}

impl AppState {
    pub fn new(config: Config, root: PathBuf) -> Self {
        let probe = DiskProbe::new(root.clone());
        Self {
            config,
            root,
            probe,
        }
    }
}
