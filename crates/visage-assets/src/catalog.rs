//! Catalogs: every category's portraits in one ordered, immutable list.

use std::ops::Range;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use visage_core::profiling::profile_function;

use crate::category::Category;
use crate::error::{AssetError, AssetResult};
use crate::loader::{LoadSettings, load_category};
use crate::portrait::Portrait;
use crate::source::BundleSource;

/// Mapping from category to the bundle directory that holds it.
///
/// Iteration order is insertion order and decides the order of categories in
/// the combined catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLayout {
    dirs: IndexMap<Category, PathBuf>,
}

impl CatalogLayout {
    /// An empty layout.
    pub fn empty() -> Self {
        Self {
            dirs: IndexMap::new(),
        }
    }

    /// Map `category` to `dir`, keeping its position if it was already present.
    pub fn with(mut self, category: Category, dir: impl Into<PathBuf>) -> Self {
        self.dirs.insert(category, dir.into());
        self
    }

    /// Directory for `category`, if it is part of the layout.
    pub fn dir(&self, category: Category) -> Option<&Path> {
        self.dirs.get(&category).map(PathBuf::as_path)
    }

    /// Categories and their directories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Path)> {
        self.dirs.iter().map(|(category, dir)| (*category, dir.as_path()))
    }

    /// Number of categories in the layout.
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Returns `true` if the layout has no categories.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl Default for CatalogLayout {
    /// `men` then `women`, each in the directory named after it.
    fn default() -> Self {
        Category::ALL
            .into_iter()
            .fold(Self::empty(), |layout, category| {
                layout.with(category, category.dir_name())
            })
    }
}

/// Immutable portrait catalog.
///
/// Holds the combined list of every category's portraits. Each category is a
/// contiguous span of that list, in layout order.
#[derive(Debug, Clone)]
pub struct Catalog {
    portraits: Vec<Portrait>,
    spans: IndexMap<Category, Range<usize>>,
}

impl Catalog {
    /// Load every category of `layout` from `source` and join them.
    ///
    /// Every [`Category`] must be mapped by the layout; a missing one fails
    /// with [`AssetError::EmptyCategory`] before anything is read.
    pub fn load<S>(source: &S, layout: &CatalogLayout, settings: &LoadSettings) -> AssetResult<Self>
    where
        S: BundleSource + ?Sized,
    {
        profile_function!();

        if let Some(category) = Category::ALL
            .into_iter()
            .find(|category| layout.dir(*category).is_none())
        {
            return Err(AssetError::EmptyCategory { category });
        }

        let mut lists = Vec::with_capacity(layout.len());
        for (category, dir) in layout.iter() {
            let portraits = load_category(source, dir, settings)?;
            tracing::debug!("Category '{}': {} portraits", category, portraits.len());
            lists.push((category, portraits));
        }

        let catalog = build_catalog(lists)?;
        tracing::info!(
            "Loaded catalog of {} portraits in {} categories from {}",
            catalog.len(),
            catalog.spans.len(),
            source.describe()
        );
        Ok(catalog)
    }

    /// Every portrait, category by category.
    pub fn all(&self) -> &[Portrait] {
        &self.portraits
    }

    /// Portraits of one category. Empty if the category is not in the catalog.
    pub fn category(&self, category: Category) -> &[Portrait] {
        self.spans
            .get(&category)
            .map(|span| &self.portraits[span.clone()])
            .unwrap_or(&[])
    }

    /// Total number of portraits.
    pub fn len(&self) -> usize {
        self.portraits.len()
    }

    /// Returns `true` if the catalog holds no portraits.
    pub fn is_empty(&self) -> bool {
        self.portraits.is_empty()
    }

    /// Number of portraits in one category.
    pub fn category_len(&self, category: Category) -> usize {
        self.spans.get(&category).map_or(0, |span| span.len())
    }

    /// Categories present in the catalog, in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.spans.keys().copied()
    }

    /// Category whose list contains a portrait with exactly these bytes.
    pub fn classify(&self, bytes: &[u8]) -> Option<Category> {
        let index = self.portraits.iter().position(|p| p.as_bytes() == bytes)?;
        self.spans
            .iter()
            .find(|(_, span)| span.contains(&index))
            .map(|(category, _)| *category)
    }
}

/// Join per-category lists into a catalog, keeping the given order.
///
/// At least one list is required, every list must be non-empty and every
/// category may appear once.
pub fn build_catalog<I>(lists: I) -> AssetResult<Catalog>
where
    I: IntoIterator<Item = (Category, Vec<Portrait>)>,
{
    let mut portraits = Vec::new();
    let mut spans = IndexMap::new();

    for (category, list) in lists {
        if list.is_empty() {
            return Err(AssetError::EmptyCategory { category });
        }
        if spans.contains_key(&category) {
            return Err(AssetError::DuplicateCategory { category });
        }
        let start = portraits.len();
        portraits.extend(list);
        spans.insert(category, start..portraits.len());
    }

    if spans.is_empty() {
        return Err(AssetError::EmptyLayout);
    }
    Ok(Catalog { portraits, spans })
}
