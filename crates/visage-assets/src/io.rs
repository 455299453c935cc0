//! Bundle source implementations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AssetError, AssetResult};
use crate::source::{BundleSource, bundle_key, key_in_dir};

/// A bundle compiled into the binary as a static `(path, bytes)` table.
///
/// Paths are bundle keys such as `"men/01.jpg"`.
#[derive(Debug, Clone, Copy)]
pub struct StaticSource {
    files: &'static [(&'static str, &'static [u8])],
}

impl StaticSource {
    /// Wrap a static file table.
    pub const fn new(files: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { files }
    }

    /// Number of files in the table.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl BundleSource for StaticSource {
    fn list(&self, dir: &Path) -> AssetResult<Vec<PathBuf>> {
        let dir_key = bundle_key(dir);
        let paths: Vec<PathBuf> = self
            .files
            .iter()
            .filter(|(key, _)| key_in_dir(key, &dir_key))
            .map(|(key, _)| PathBuf::from(*key))
            .collect();

        if paths.is_empty() {
            return Err(AssetError::NotFound { path: dir_key });
        }
        Ok(paths)
    }

    fn read(&self, path: &Path) -> AssetResult<Arc<[u8]>> {
        let key = bundle_key(path);
        self.files
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, bytes)| Arc::from(*bytes))
            .ok_or(AssetError::NotFound { path: key })
    }

    fn describe(&self) -> String {
        format!("static bundle ({} files)", self.files.len())
    }
}

/// A bundle rooted at a directory on disk.
pub struct FileSource {
    /// Base path for relative paths.
    base_path: PathBuf,
}

impl FileSource {
    /// Create a new file source with a base path.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// The directory this source reads from.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a bundle path relative to the base path.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    fn walk(&self, relative: &Path, out: &mut Vec<PathBuf>) -> AssetResult<()> {
        let full_path = self.resolve_path(relative);
        let entries = std::fs::read_dir(&full_path).map_err(|e| io_error(&full_path, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| io_error(&full_path, e))?;
            let file_type = entry.file_type().map_err(|e| io_error(&entry.path(), e))?;
            let child = relative.join(entry.file_name());
            if file_type.is_dir() {
                self.walk(&child, out)?;
            } else {
                out.push(child);
            }
        }
        Ok(())
    }
}

impl BundleSource for FileSource {
    fn list(&self, dir: &Path) -> AssetResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        self.walk(dir, &mut paths)?;
        Ok(paths)
    }

    fn read(&self, path: &Path) -> AssetResult<Arc<[u8]>> {
        let full_path = self.resolve_path(path);
        std::fs::read(&full_path)
            .map(Arc::from)
            .map_err(|e| io_error(&full_path, e))
    }

    fn describe(&self) -> String {
        format!("directory {}", self.base_path.display())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> AssetError {
    if source.kind() == std::io::ErrorKind::NotFound {
        AssetError::NotFound {
            path: path.display().to_string(),
        }
    } else {
        AssetError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// In-memory bundle for testing or assets assembled at runtime.
#[derive(Default, Clone)]
pub struct MemorySource {
    /// Stored bytes keyed by bundle path.
    files: BTreeMap<String, Arc<[u8]>>,
}

impl MemorySource {
    /// Create a new empty memory source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add bytes for a path, replacing any previous entry.
    pub fn insert(&mut self, path: impl AsRef<Path>, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(bundle_key(path.as_ref()), bytes.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, path: impl AsRef<Path>, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.insert(path, bytes);
        self
    }

    /// Remove bytes for a path.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Arc<[u8]>> {
        self.files.remove(&bundle_key(path.as_ref()))
    }

    /// Check if bytes exist for a path.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(&bundle_key(path.as_ref()))
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no files are stored.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl BundleSource for MemorySource {
    fn list(&self, dir: &Path) -> AssetResult<Vec<PathBuf>> {
        let dir_key = bundle_key(dir);
        let paths: Vec<PathBuf> = self
            .files
            .keys()
            .filter(|key| key_in_dir(key, &dir_key))
            .map(PathBuf::from)
            .collect();

        if paths.is_empty() {
            return Err(AssetError::NotFound { path: dir_key });
        }
        Ok(paths)
    }

    fn read(&self, path: &Path) -> AssetResult<Arc<[u8]>> {
        let key = bundle_key(path);
        self.files
            .get(&key)
            .cloned()
            .ok_or(AssetError::NotFound { path: key })
    }

    fn describe(&self) -> String {
        format!("memory bundle ({} files)", self.files.len())
    }
}
