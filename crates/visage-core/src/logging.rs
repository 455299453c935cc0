//! Logging bootstrap based on `tracing-subscriber`.

/// Default filter directives used by [`init`].
pub const DEFAULT_FILTER: &str = "info,visage=debug,visage_assets=debug";

/// Install a formatting subscriber with the default filter.
///
/// `RUST_LOG` is not consulted; use [`init_with_filter`] to override the directives.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a formatting subscriber with custom filter directives.
///
/// Does nothing if a global subscriber is already set, so calling this from
/// several entry points is harmless.
pub fn init_with_filter(filter: &str) {
    let result = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    if result.is_err() {
        tracing::debug!("Global subscriber already installed, keeping it");
    }
}
