//! Encoded restore points of the full pixel buffer.

use std::fmt;
use std::rc::Rc;

/// An immutable PNG-encoded copy of the whole buffer at one point in time.
///
/// Snapshots are opaque: they are only ever written back wholesale, never
/// inspected or diffed. Cloning shares the encoded bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    png: Rc<[u8]>,
}

impl Snapshot {
    /// Wraps already-encoded PNG bytes.
    pub fn from_png(bytes: Vec<u8>) -> Self {
        Self { png: bytes.into() }
    }

    /// The encoded PNG bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.png.len()
    }

    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("png_bytes", &self.png.len())
            .finish()
    }
}
