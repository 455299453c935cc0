//! Errors returned by the portrait library.

use std::sync::Arc;

use visage_assets::{AssetError, Category};

/// Errors that can occur when building a library or picking a portrait.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PortraitError {
    /// The bundle could not be loaded.
    ///
    /// Shared so the default library can report the same failure to every caller.
    #[error("Portrait bundle failed to load: {0}")]
    Bundle(#[source] Arc<AssetError>),

    /// There is nothing to pick from.
    #[error("No portraits available in {}", describe_pool(.category))]
    Unavailable {
        /// The requested category, or `None` for the whole catalog.
        category: Option<Category>,
    },

    /// [`init`](crate::init) was called after the default library was built.
    #[error("The default portrait library is already initialized")]
    AlreadyInitialized,
}

fn describe_pool(category: &Option<Category>) -> String {
    match category {
        Some(category) => format!("category '{}'", category),
        None => "the catalog".to_string(),
    }
}

impl From<AssetError> for PortraitError {
    fn from(err: AssetError) -> Self {
        PortraitError::Bundle(Arc::new(err))
    }
}

/// Result type alias for portrait operations.
pub type PortraitResult<T> = Result<T, PortraitError>;
