//! Visage Assets
//!
//! Loads portrait bundles into immutable, ordered catalogs.
//!
//! A bundle is any [`BundleSource`]: the embedded table compiled into the
//! `visage` crate, a directory on disk, or an in-memory map. Loading walks one
//! directory per [`Category`], keeps the `.jpg` files, sorts them by path and
//! reads them into [`Portrait`] values. The per-category lists are then joined
//! into a [`Catalog`].

pub mod catalog;
pub mod category;
pub mod error;
pub mod io;
pub mod loader;
pub mod portrait;
pub mod source;

pub use catalog::{Catalog, CatalogLayout, build_catalog};
pub use category::Category;
pub use error::{AssetError, AssetResult};
pub use io::{FileSource, MemorySource, StaticSource};
pub use loader::{LoadSettings, ReadPolicy, load_category};
pub use portrait::Portrait;
pub use source::BundleSource;
