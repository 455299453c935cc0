//! Visage - bundled portraits, picked at random
//!
//! A fixed set of JPEG portraits is compiled into the crate. The first call
//! loads them into an immutable catalog; every call after that draws one
//! uniformly at random, either from the whole catalog or from one category.
//!
//! # Quick Start
//!
//! ```no_run
//! let jpeg = visage::random_portrait()?;
//! std::fs::write("someone.jpg", &*jpeg)?;
//!
//! let woman = visage::random_woman()?;
//! assert!(woman.starts_with(&[0xFF, 0xD8]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! - [`Library`] owns a [`Catalog`] and a [`Selector`]. Build one yourself to
//!   pick from another bundle or to inject a seeded generator.
//! - The free functions use a process-wide default library, built from the
//!   embedded bundle on first use. Call [`init`] at startup to choose its
//!   [`Config`] and surface load errors early.

pub mod bundle;
pub mod config;
pub mod error;
pub mod global;
pub mod library;
pub mod random;
pub mod selector;

pub use config::{Config, RandomMode};
pub use error::{PortraitError, PortraitResult};
pub use global::{init, library, random_man, random_of, random_portrait, random_woman};
pub use library::Library;
pub use random::{PerThreadRng, RandomSource, SharedRng};
pub use selector::Selector;

pub use visage_assets::{
    AssetError, BundleSource, Catalog, CatalogLayout, Category, LoadSettings, Portrait, ReadPolicy,
};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        Category, Config, Library, Portrait, PortraitError, PortraitResult, RandomMode,
        random_man, random_of, random_portrait, random_woman,
    };
}
