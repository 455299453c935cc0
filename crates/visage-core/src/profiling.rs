//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are recorded only after [`enable`] (or [`init_profiling`]) turns them on,
//! so the macros can stay in hot paths.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(feature = "profiling-server")]
use std::sync::OnceLock;

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Record scopes in-process only.
    InProcess,
    /// Send profiling data to puffin_viewer via HTTP.
    #[cfg(feature = "profiling-server")]
    PuffinHttp,
}

#[cfg(feature = "profiling-server")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Turn scope recording on or off.
#[inline]
pub fn enable(on: bool) {
    puffin::set_scopes_on(on);
}

/// Returns `true` if scopes are currently being recorded.
#[inline]
pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use visage_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::InProcess);
/// ```
pub fn init_profiling(backend: ProfilingBackend) {
    enable(true);
    match backend {
        ProfilingBackend::InProcess => {
            tracing::info!("Puffin scopes enabled (in-process)");
        }
        #[cfg(feature = "profiling-server")]
        ProfilingBackend::PuffinHttp => match puffin_http::Server::new("0.0.0.0:8585") {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        },
    }
}

/// Close the current profiling frame so recorded scopes become visible.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
