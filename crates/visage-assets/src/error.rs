//! Error types for bundle loading.

use std::path::PathBuf;

use crate::category::Category;

/// Errors that can occur while loading a portrait bundle.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The requested directory or file does not exist in the bundle.
    #[error("Asset not found: {path}")]
    NotFound {
        /// The path that was looked up.
        path: String,
    },

    /// Failed to list or read bundle data.
    #[error("IO error loading '{}': {source}", .path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A `.jpg` entry does not start with the JPEG start-of-image marker.
    #[error("Not a JPEG image: {}", .path.display())]
    InvalidPortrait {
        /// The offending entry.
        path: PathBuf,
    },

    /// A category holds no portraits after loading.
    #[error("Category '{category}' has no portraits")]
    EmptyCategory {
        /// The empty category.
        category: Category,
    },

    /// A catalog was built from no categories at all.
    #[error("Catalog has no categories")]
    EmptyLayout,

    /// The same category was supplied twice when building a catalog.
    #[error("Category '{category}' appears more than once")]
    DuplicateCategory {
        /// The repeated category.
        category: Category,
    },
}

impl AssetError {
    /// Returns `true` for errors raised by a single bundle entry rather than the bundle layout.
    ///
    /// These are the errors [`ReadPolicy::Skip`](crate::ReadPolicy::Skip) tolerates.
    pub fn is_entry_error(&self) -> bool {
        matches!(
            self,
            AssetError::Io { .. } | AssetError::NotFound { .. } | AssetError::InvalidPortrait { .. }
        )
    }
}

/// Result type alias for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
