//! Integration tests for the embedded bundle and the default library.

use std::path::Path;
use std::thread;

use visage::prelude::*;
use visage::{Catalog, CatalogLayout, LoadSettings, library};

// ============================================================================
// Helper Functions
// ============================================================================

fn assert_jpeg(portrait: &Portrait) {
    assert!(!portrait.is_empty());
    assert_eq!(portrait[0], 0xFF);
    assert_eq!(portrait[1], 0xD8);
}

fn default_catalog() -> &'static Catalog {
    library().unwrap().catalog()
}

// ============================================================================
// Default Library
// ============================================================================

#[test]
fn test_catalog_counts() {
    let catalog = default_catalog();
    let men = catalog.category_len(Category::Man);
    let women = catalog.category_len(Category::Woman);

    assert!(men > 0);
    assert!(women > 0);
    assert_eq!(catalog.len(), men + women);
}

#[test]
fn test_random_portrait_is_jpeg() {
    assert_jpeg(&random_portrait().unwrap());
}

#[test]
fn test_random_man_is_jpeg_and_a_man() {
    let catalog = default_catalog();
    for _ in 0..50 {
        let portrait = random_man().unwrap();
        assert_jpeg(&portrait);
        assert!(catalog.category(Category::Man).contains(&portrait));
        assert!(!catalog.category(Category::Woman).contains(&portrait));
    }
}

#[test]
fn test_random_woman_is_jpeg_and_a_woman() {
    let catalog = default_catalog();
    for _ in 0..50 {
        let portrait = random_woman().unwrap();
        assert_jpeg(&portrait);
        assert!(catalog.category(Category::Woman).contains(&portrait));
        assert!(!catalog.category(Category::Man).contains(&portrait));
    }
}

#[test]
fn test_random_of_matches_category() {
    let catalog = default_catalog();
    for category in Category::ALL {
        let portrait = random_of(category).unwrap();
        assert_eq!(catalog.classify(&portrait), Some(category));
    }
}

#[test]
fn test_random_distribution() {
    let catalog = default_catalog();
    let iterations = 100;
    let mut men_count = 0;
    let mut women_count = 0;

    for _ in 0..iterations {
        let portrait = random_portrait().unwrap();
        if catalog.category(Category::Man).contains(&portrait) {
            men_count += 1;
        }
        if catalog.category(Category::Woman).contains(&portrait) {
            women_count += 1;
        }
    }

    assert_eq!(
        men_count + women_count,
        iterations,
        "men={}, women={}",
        men_count,
        women_count
    );
}

#[test]
fn test_both_categories_seen() {
    let catalog = default_catalog();
    let mut men_count = 0;
    let mut women_count = 0;

    for _ in 0..1000 {
        match catalog.classify(&random_portrait().unwrap()) {
            Some(Category::Man) => men_count += 1,
            Some(Category::Woman) => women_count += 1,
            None => panic!("random_portrait() returned an unknown portrait"),
        }
    }

    assert!(men_count > 0, "never returned a man's portrait");
    assert!(women_count > 0, "never returned a woman's portrait");
}

#[test]
fn test_init_after_first_use_is_rejected() {
    library().unwrap();
    assert!(matches!(
        visage::init(Config::default()),
        Err(PortraitError::AlreadyInitialized)
    ));
}

// ============================================================================
// Independent Loads
// ============================================================================

#[test]
fn test_independent_loads_are_identical() {
    let first = Library::bundled(&Config::default()).unwrap();
    let second = Library::bundled(&Config::default()).unwrap();

    assert_eq!(first.catalog().all(), second.catalog().all());
    assert_eq!(first.catalog().all(), default_catalog().all());
    for category in Category::ALL {
        assert_eq!(
            first.catalog().category(category),
            second.catalog().category(category)
        );
    }
}

#[test]
fn test_bundled_files_match_catalog_order() {
    let source = visage::bundle::source();
    let men = visage_assets::load_category(&source, Path::new("men"), &LoadSettings::new()).unwrap();
    assert_eq!(men.as_slice(), default_catalog().category(Category::Man));

    let catalog = Catalog::load(&source, &CatalogLayout::default(), &LoadSettings::new()).unwrap();
    assert_eq!(catalog.all(), default_catalog().all());
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_callers_get_valid_portraits() {
    let handles: Vec<_> = (0..16)
        .map(|i| {
            thread::spawn(move || {
                for _ in 0..200 {
                    let portrait = match i % 3 {
                        0 => random_portrait(),
                        1 => random_man(),
                        _ => random_woman(),
                    }
                    .unwrap();
                    assert_jpeg(&portrait);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_modes() {
    for mode in [RandomMode::Entropy, RandomMode::Seeded(3), RandomMode::ThreadLocal] {
        let library = Library::bundled(&Config::new().random(mode)).unwrap();
        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..200 {
                        let portrait = library.random_portrait().unwrap();
                        assert_jpeg(&portrait);
                        assert!(library.catalog().classify(&portrait).is_some());
                    }
                });
            }
        });
    }
}
