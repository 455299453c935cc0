//! Explicit startup initialization of the default library.
//!
//! Kept in its own test binary so no other test touches the default library first.

use visage::prelude::*;

#[test]
fn test_init_then_use() {
    let library = visage::init(Config::new().random(RandomMode::Seeded(11))).unwrap();
    assert!(library.catalog().len() > 0);

    let portrait = random_portrait().unwrap();
    assert!(library.catalog().classify(&portrait).is_some());

    // Same instance is handed out afterwards
    assert!(std::ptr::eq(visage::library().unwrap(), library));

    assert!(matches!(
        visage::init(Config::default()),
        Err(PortraitError::AlreadyInitialized)
    ));
}
