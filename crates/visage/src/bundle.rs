//! The portrait bundle embedded at compile time.
//!
//! `build.rs` walks `assets/portraits` and emits an `include_bytes!` table keyed
//! by bundle path (`"men/00.jpg"`, `"women/03.jpg"`, ...).

use visage_assets::StaticSource;

static FILES: &[(&str, &[u8])] = include!(concat!(env!("OUT_DIR"), "/bundle.rs"));

/// Source over the embedded bundle.
pub fn source() -> StaticSource {
    StaticSource::new(FILES)
}

/// Paths of every embedded file, sorted.
pub fn paths() -> impl Iterator<Item = &'static str> {
    FILES.iter().map(|(path, _)| *path)
}
