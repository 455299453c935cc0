//! The process-wide default library and the free functions that use it.

use std::sync::OnceLock;

use visage_assets::{Category, Portrait};

use crate::config::Config;
use crate::error::{PortraitError, PortraitResult};
use crate::library::Library;

static DEFAULT_LIBRARY: OnceLock<PortraitResult<Library>> = OnceLock::new();

fn build(config: &Config) -> PortraitResult<Library> {
    Library::bundled(config).inspect_err(|e| {
        tracing::error!("Failed to load bundled portraits: {}", e);
    })
}

/// Build the default library with `config`.
///
/// Call once at startup to fail fast on a broken bundle. Returns
/// [`PortraitError::AlreadyInitialized`] if the default library already exists,
/// whether from an earlier `init` or from a call to one of the free functions.
/// If that earlier build failed, its cached error is returned instead.
pub fn init(config: Config) -> PortraitResult<&'static Library> {
    init_once(&DEFAULT_LIBRARY, || build(&config))
}

fn init_once<F>(
    slot: &OnceLock<PortraitResult<Library>>,
    build: F,
) -> PortraitResult<&Library>
where
    F: FnOnce() -> PortraitResult<Library>,
{
    let mut built_here = false;
    let library = slot.get_or_init(|| {
        built_here = true;
        build()
    });

    match library {
        Ok(_) if !built_here => Err(PortraitError::AlreadyInitialized),
        Ok(library) => Ok(library),
        Err(err) => Err(err.clone()),
    }
}

/// The default library, built with [`Config::default`] on first use.
///
/// A failed build is cached; later calls return the same error.
pub fn library() -> PortraitResult<&'static Library> {
    DEFAULT_LIBRARY
        .get_or_init(|| build(&Config::default()))
        .as_ref()
        .map_err(Clone::clone)
}

/// A random portrait from any category. The bytes are JPEG data.
pub fn random_portrait() -> PortraitResult<Portrait> {
    library()?.random_portrait()
}

/// A random portrait of a man. The bytes are JPEG data.
pub fn random_man() -> PortraitResult<Portrait> {
    library()?.random_man()
}

/// A random portrait of a woman. The bytes are JPEG data.
pub fn random_woman() -> PortraitResult<Portrait> {
    library()?.random_woman()
}

/// A random portrait from `category`.
pub fn random_of(category: Category) -> PortraitResult<Portrait> {
    library()?.random_of(category)
}
