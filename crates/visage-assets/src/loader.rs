//! Category loading.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use visage_core::profiling::profile_function;

use crate::error::{AssetError, AssetResult};
use crate::portrait::Portrait;
use crate::source::BundleSource;

/// What to do when a single bundle entry cannot be turned into a portrait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Abort the load with the entry's error.
    #[default]
    Fail,
    /// Log a warning and leave the entry out of the category.
    Skip,
}

/// Settings for how a category should be loaded.
#[derive(Debug, Clone)]
pub struct LoadSettings {
    /// File extension (without the dot) of portrait entries. Compared case-sensitively.
    pub extension: String,

    /// Handling of unreadable or non-JPEG entries.
    pub on_error: ReadPolicy,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            extension: "jpg".to_string(),
            on_error: ReadPolicy::Fail,
        }
    }
}

impl LoadSettings {
    /// Create default load settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the portrait file extension.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the entry error policy.
    pub fn on_error(mut self, policy: ReadPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Returns `true` if `path` names a portrait entry.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == OsStr::new(&self.extension))
    }
}

/// Load every portrait below `dir`, ordered by path.
///
/// Entries are filtered by [`LoadSettings::extension`], sorted by the bytes of
/// their path and read in that order. A missing or unreadable directory always
/// fails the load; failures of individual entries follow [`LoadSettings::on_error`].
pub fn load_category<S>(source: &S, dir: &Path, settings: &LoadSettings) -> AssetResult<Vec<Portrait>>
where
    S: BundleSource + ?Sized,
{
    profile_function!();

    let mut paths: Vec<PathBuf> = source
        .list(dir)?
        .into_iter()
        .filter(|path| settings.matches(path))
        .collect();
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let mut portraits = Vec::with_capacity(paths.len());
    for path in &paths {
        match read_portrait(source, path) {
            Ok(portrait) => portraits.push(portrait),
            Err(err) if settings.on_error == ReadPolicy::Skip && err.is_entry_error() => {
                tracing::warn!("Skipping bundle entry '{}': {}", path.display(), err);
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        "Loaded {} portraits from '{}' ({} entries matched)",
        portraits.len(),
        dir.display(),
        paths.len()
    );
    Ok(portraits)
}

fn read_portrait<S>(source: &S, path: &Path) -> AssetResult<Portrait>
where
    S: BundleSource + ?Sized,
{
    let bytes = source.read(path)?;
    Portrait::from_jpeg(bytes).ok_or_else(|| AssetError::InvalidPortrait {
        path: path.to_path_buf(),
    })
}
