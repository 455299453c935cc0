//! A bundle wrapper that records calls and injects failures.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use visage_assets::{AssetError, AssetResult, BundleSource};

/// Wraps a [`BundleSource`], recording every read and failing chosen paths.
///
/// Uses `Mutex` for interior mutability so `&self` trait methods can record.
pub struct RecordingSource<S> {
    inner: S,
    failing: HashSet<PathBuf>,
    reads: Mutex<Vec<PathBuf>>,
    lists: Mutex<Vec<PathBuf>>,
}

impl<S: BundleSource> RecordingSource<S> {
    /// Wrap `inner` without injected failures.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
            reads: Mutex::new(Vec::new()),
            lists: Mutex::new(Vec::new()),
        }
    }

    /// Make reads of `path` fail with a permission error.
    pub fn fail_read(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Paths read so far, in call order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().clone()
    }

    /// Directories listed so far, in call order.
    pub fn lists(&self) -> Vec<PathBuf> {
        self.lists.lock().clone()
    }

    /// Forget recorded calls.
    pub fn reset(&self) {
        self.reads.lock().clear();
        self.lists.lock().clear();
    }
}

impl<S: BundleSource> BundleSource for RecordingSource<S> {
    fn list(&self, dir: &Path) -> AssetResult<Vec<PathBuf>> {
        self.lists.lock().push(dir.to_path_buf());
        self.inner.list(dir)
    }

    fn read(&self, path: &Path) -> AssetResult<Arc<[u8]>> {
        self.reads.lock().push(path.to_path_buf());
        if self.failing.contains(path) {
            return Err(AssetError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "injected read failure",
                ),
            });
        }
        self.inner.read(path)
    }

    fn describe(&self) -> String {
        format!("recording({})", self.inner.describe())
    }
}
