//! A loaded catalog paired with a selector.

use visage_assets::{BundleSource, Catalog, Category, Portrait};
use visage_core::profiling::profile_function;

use crate::bundle;
use crate::config::Config;
use crate::error::{PortraitError, PortraitResult};
use crate::selector::Selector;

/// An immutable portrait catalog with random access.
///
/// Safe to share between threads; only the selector's generator is
/// synchronized.
///
/// # Example
///
/// ```
/// use visage::{Config, Library, RandomMode};
///
/// let library = Library::bundled(&Config::new().random(RandomMode::Seeded(1)))?;
/// let portrait = library.random_man()?;
/// assert!(library.catalog().category(visage::Category::Man).contains(&portrait));
/// # Ok::<(), visage::PortraitError>(())
/// ```
pub struct Library {
    catalog: Catalog,
    selector: Selector,
}

static_assertions::assert_impl_all!(Library: Send, Sync);

impl Library {
    /// Pair an already loaded catalog with a selector.
    pub fn new(catalog: Catalog, selector: Selector) -> Self {
        Self { catalog, selector }
    }

    /// Load a catalog from `source` as described by `config`.
    pub fn load<S>(source: &S, config: &Config) -> PortraitResult<Self>
    where
        S: BundleSource + ?Sized,
    {
        profile_function!();
        let catalog = Catalog::load(source, &config.layout, &config.load)?;
        Ok(Self::new(catalog, Selector::from_mode(config.random)))
    }

    /// Load the bundle embedded in this crate.
    pub fn bundled(config: &Config) -> PortraitResult<Self> {
        Self::load(&bundle::source(), config)
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A portrait from any category.
    ///
    /// Larger categories are proportionally more likely.
    pub fn random_portrait(&self) -> PortraitResult<Portrait> {
        self.selector
            .pick(self.catalog.all())
            .cloned()
            .ok_or(PortraitError::Unavailable { category: None })
    }

    /// A portrait from `category`.
    pub fn random_of(&self, category: Category) -> PortraitResult<Portrait> {
        self.selector
            .pick(self.catalog.category(category))
            .cloned()
            .ok_or(PortraitError::Unavailable {
                category: Some(category),
            })
    }

    /// A portrait of a man.
    pub fn random_man(&self) -> PortraitResult<Portrait> {
        self.random_of(Category::Man)
    }

    /// A portrait of a woman.
    pub fn random_woman(&self) -> PortraitResult<Portrait> {
        self.random_of(Category::Woman)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RandomMode;
    use visage_assets::{AssetError, CatalogLayout, build_catalog};
    use visage_test_utils::{fake_jpeg, fixture_source};

    fn fixture_library(men: usize, women: usize) -> Library {
        let config = Config::new().random(RandomMode::Seeded(0x5eed));
        Library::load(&fixture_source(men, women), &config).unwrap()
    }

    #[test]
    fn test_category_picks_stay_in_category() {
        let library = fixture_library(5, 5);
        let men = library.catalog().category(Category::Man);
        let women = library.catalog().category(Category::Woman);

        for _ in 0..200 {
            let man = library.random_man().unwrap();
            assert!(men.contains(&man));
            assert!(!women.contains(&man));

            let woman = library.random_woman().unwrap();
            assert!(women.contains(&woman));
            assert!(!men.contains(&woman));
        }
    }

    #[test]
    fn test_every_draw_is_classified_once() {
        let library = fixture_library(5, 5);
        let men = library.catalog().category(Category::Man);
        let women = library.catalog().category(Category::Woman);

        let mut men_count = 0;
        let mut women_count = 0;
        for _ in 0..100 {
            let portrait = library.random_portrait().unwrap();
            if men.contains(&portrait) {
                men_count += 1;
            }
            if women.contains(&portrait) {
                women_count += 1;
            }
        }
        assert_eq!(men_count + women_count, 100);
    }

    #[test]
    fn test_both_categories_are_drawn() {
        let library = fixture_library(4, 4);
        let mut seen = [false; 2];
        for _ in 0..1000 {
            let portrait = library.random_portrait().unwrap();
            match library.catalog().classify(&portrait) {
                Some(Category::Man) => seen[0] = true,
                Some(Category::Woman) => seen[1] = true,
                None => panic!("draw outside the catalog"),
            }
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_layout_missing_category_fails_to_load() {
        let config = Config::new().layout(CatalogLayout::empty().with(Category::Man, "men"));
        match Library::load(&fixture_source(2, 2), &config) {
            Err(PortraitError::Bundle(source)) => assert!(matches!(
                *source,
                AssetError::EmptyCategory {
                    category: Category::Woman
                }
            )),
            Err(other) => panic!("expected a bundle error, got {:?}", other),
            Ok(_) => panic!("a layout without women must not load"),
        }
    }

    #[test]
    fn test_empty_layout_fails_to_load() {
        let config = Config::new().layout(CatalogLayout::empty());
        let result = Library::load(&fixture_source(2, 2), &config);
        assert!(matches!(result, Err(PortraitError::Bundle(_))));
    }

    #[test]
    fn test_hand_built_catalog_reports_missing_category() {
        let portrait = Portrait::from_jpeg(fake_jpeg("men/only")).unwrap();
        let catalog = build_catalog([(Category::Man, vec![portrait.clone()])]).unwrap();
        let library = Library::new(catalog, Selector::from_mode(RandomMode::Seeded(1)));

        assert_eq!(library.random_man().unwrap(), portrait);
        assert_eq!(library.random_portrait().unwrap(), portrait);
        assert!(matches!(
            library.random_woman(),
            Err(PortraitError::Unavailable {
                category: Some(Category::Woman)
            })
        ));
    }

    #[test]
    fn test_load_error_is_bundle_error() {
        let result = Library::load(&fixture_source(2, 0), &Config::new());
        assert!(matches!(result, Err(PortraitError::Bundle(_))));
    }

    #[test]
    fn test_seeded_libraries_repeat() {
        let a = fixture_library(6, 6);
        let b = fixture_library(6, 6);
        for _ in 0..20 {
            assert_eq!(a.random_portrait().unwrap(), b.random_portrait().unwrap());
        }
    }
}
