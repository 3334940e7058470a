//! Per-request scratch files
//!
//! Scratch names embed a millisecond timestamp plus a process-local sequence
//! number so concurrent requests never share a file. A [`Scratch`] guard
//! tracks everything a request created and deletes it best-effort on drop,
//! which covers both the success and every early-return failure path.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A unique scratch file name: `{prefix}_{millis}_{seq}.{ext}`
#[must_use]
pub fn unique_name(prefix: &str, ext: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{millis}_{seq}.{ext}")
}

/// Guard over one request's scratch files
#[derive(Debug, Default)]
pub struct Scratch {
    paths: Vec<PathBuf>,
}

impl Scratch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh scratch path under `dir` and return it
    #[must_use]
    pub fn create(&mut self, dir: &Path, prefix: &str, ext: &str) -> PathBuf {
        let path = dir.join(unique_name(prefix, ext));
        self.paths.push(path.clone());
        path
    }

    /// Stop tracking `path`, keeping the file past the request (delivered
    /// outputs)
    pub fn release(&mut self, path: &Path) {
        self.paths.retain(|p| p != path);
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        for path in &self.paths {
            if let Err(err) = std::fs::remove_file(path) {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!(path = %path.display(), error = %err, "scratch_cleanup_failed");
                }
            }
        }
    }
}
