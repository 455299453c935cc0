//! Visage Core
//!
//! Logging and profiling shared by the visage crates.

pub mod logging;
pub mod profiling;
