//! The portrait asset type.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// JPEG start-of-image marker every portrait begins with.
pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Returns `true` if `bytes` begins with the JPEG start-of-image marker.
#[inline]
pub fn is_jpeg(bytes: &[u8]) -> bool {
    bytes.starts_with(&JPEG_SOI)
}

/// An immutable JPEG-encoded portrait.
///
/// Cloning shares the underlying buffer. Equality and hashing compare the
/// image bytes, so two portraits loaded from identical files are equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Portrait {
    bytes: Arc<[u8]>,
}

impl Portrait {
    /// Wrap JPEG bytes, or return `None` if they lack the start-of-image marker.
    pub fn from_jpeg(bytes: impl Into<Arc<[u8]>>) -> Option<Self> {
        let bytes = bytes.into();
        is_jpeg(&bytes).then_some(Self { bytes })
    }

    /// The raw JPEG bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrow the shared buffer.
    pub fn shared(&self) -> &Arc<[u8]> {
        &self.bytes
    }
}

impl Deref for Portrait {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Portrait {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Portrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portrait")
            .field("len", &self.bytes.len())
            .finish()
    }
}
