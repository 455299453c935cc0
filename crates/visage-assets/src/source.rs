//! Bundle sources - where portraits come from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::AssetResult;

/// Read-only access to a bundle of files.
///
/// Paths are relative to the root of the bundle and use `/` separated
/// components, regardless of where the bytes actually live.
pub trait BundleSource: Send + Sync {
    /// List every file below `dir`, descending into subdirectories.
    ///
    /// Returns [`AssetError::NotFound`](crate::AssetError::NotFound) if `dir`
    /// does not exist. The order of the returned paths is unspecified.
    fn list(&self, dir: &Path) -> AssetResult<Vec<PathBuf>>;

    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> AssetResult<Arc<[u8]>>;

    /// Short description of the source for logging.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<S: BundleSource + ?Sized> BundleSource for &S {
    fn list(&self, dir: &Path) -> AssetResult<Vec<PathBuf>> {
        (**self).list(dir)
    }

    fn read(&self, path: &Path) -> AssetResult<Arc<[u8]>> {
        (**self).read(path)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: BundleSource + ?Sized> BundleSource for Box<S> {
    fn list(&self, dir: &Path) -> AssetResult<Vec<PathBuf>> {
        (**self).list(dir)
    }

    fn read(&self, path: &Path) -> AssetResult<Arc<[u8]>> {
        (**self).read(path)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Normalize a bundle path into a `/` separated key without leading `./` or `/`.
pub(crate) fn bundle_key(path: &Path) -> String {
    let mut key = String::new();
    for component in path.components() {
        if let std::path::Component::Normal(part) = component {
            if !key.is_empty() {
                key.push('/');
            }
            key.push_str(&part.to_string_lossy());
        }
    }
    key
}

/// Returns `true` if `key` lies below the directory key `dir`.
///
/// An empty `dir` is the bundle root and contains everything.
pub(crate) fn key_in_dir(key: &str, dir: &str) -> bool {
    dir.is_empty()
        || key
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'))
}
