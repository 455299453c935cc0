//! Test utilities for visage.
//!
//! - [`fake_jpeg`] builds tiny byte strings that pass the JPEG signature check
//!   and are unique per label.
//! - [`fixture_source`] assembles a two-category in-memory bundle.
//! - [`RecordingSource`] wraps any bundle, records reads and injects failures.

pub mod fixtures;
pub mod recording;

pub use fixtures::{fake_jpeg, fixture_source};
pub use recording::RecordingSource;
