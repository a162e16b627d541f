//! Clean URL resolution
//!
//! Maps a raw request target such as `/about?ref=nav` to the file that
//! should answer it. Rules are applied in order, first match wins:
//!
//! 1. strip query string and fragment, then percent-decode
//! 2. `/` serves the root `index.html`
//! 3. drop a single trailing slash
//! 4. drop the leading slash to get a relative candidate
//! 5. a regular file at the candidate is served unchanged
//! 6. otherwise `<candidate>.html` is served (logged as a rewrite)
//! 7. otherwise `<candidate>/index.html` if the candidate is a directory
//! 8. otherwise not found (logged), the stripped candidate goes to the responder
//!
//! Resolution is a pure function of the target and a [`FileProbe`].
//! A target that does not decode to UTF-8 is not found.
//!
//! `//` leaves an empty candidate: it is neither a file nor a directory, but
//! rule 6 still probes `.html` at the root.

pub mod probe;

use percent_encoding::percent_decode_str;

pub use probe::{DiskProbe, FileProbe};

const INDEX_FILE: &str = "index.html";
const HTML_EXTENSION: &str = ".html";

/// Outcome of resolving one request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Target was `/`
    Root,
    /// A file exists at the literal candidate
    Exact(String),
    /// Served `<candidate>.html` for a clean URL
    Rewritten { path: String, original: String },
    /// Candidate is a directory with an index file
    DirectoryIndex(String),
    /// Nothing matched; `path` is the stripped candidate
    NotFound { path: String, original: String },
}

impl Resolution {
    /// Relative path under the root to hand to the static file responder
    pub fn file_path(&self) -> &str {
        match self {
            Self::Root => INDEX_FILE,
            Self::Exact(path)
            | Self::DirectoryIndex(path)
            | Self::Rewritten { path, .. }
            | Self::NotFound { path, .. } => path,
        }
    }

    /// Diagnostic line for rewrites and misses, `None` for plain hits
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Rewritten { path, original } => Some(format!("✓ Serving {path} for {original}")),
            Self::NotFound { original, .. } => Some(format!("✗ 404: {original} not found")),
            Self::Root | Self::Exact(_) | Self::DirectoryIndex(_) => None,
        }
    }
}

/// Remove query string and fragment from a request target
pub fn strip_query_and_fragment(target: &str) -> &str {
    let path = target.split('?').next().unwrap_or(target);
    path.split('#').next().unwrap_or(path)
}

/// Resolve a raw request target against the files visible through `probe`
pub fn resolve(target: &str, probe: &impl FileProbe) -> Resolution {
    let stripped = strip_query_and_fragment(target);
    let Ok(decoded) = percent_decode_str(stripped).decode_utf8() else {
        return Resolution::NotFound {
            path: stripped.strip_prefix('/').unwrap_or(stripped).to_string(),
            original: target.to_string(),
        };
    };
    let mut path: &str = &decoded;

    if path == "/" {
        return Resolution::Root;
    }

    if path.len() > 1 {
        path = path.strip_suffix('/').unwrap_or(path);
    }

    let candidate = path.strip_prefix('/').unwrap_or(path);

    if probe.is_file(candidate) {
        return Resolution::Exact(candidate.to_string());
    }

    let html_path = format!("{candidate}{HTML_EXTENSION}");
    if probe.is_file(&html_path) {
        return Resolution::Rewritten {
            path: html_path,
            original: target.to_string(),
        };
    }

    if probe.is_dir(candidate) {
        let index_path = format!("{candidate}/{INDEX_FILE}");
        if probe.is_file(&index_path) {
            return Resolution::DirectoryIndex(index_path);
        }
    }

    Resolution::NotFound {
        path: candidate.to_string(),
        original: target.to_string(),
    }
}
