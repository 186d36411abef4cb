use core::fmt;

/// Why a glyph lookup failed.
///
/// A character a font has no glyph for is not an error, see
/// [`FontRegistry::resolve_glyph`](crate::FontRegistry::resolve_glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// No registered font has this name.
    FontNotFound,
    /// The font's container could not be opened. Opening is tried again on the next lookup.
    StorageUnavailable,
    /// The container could not supply a whole glyph at the computed offset.
    StorageCorrupt {
        offset: u32,
        expected: usize,
        got: usize,
    },
    /// The caller's glyph buffer is smaller than the font's glyphs.
    BufferTooSmall { needed: usize, capacity: usize },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::FontNotFound => write!(f, "font not registered"),
            LookupError::StorageUnavailable => write!(f, "font container could not be opened"),
            LookupError::StorageCorrupt {
                offset,
                expected,
                got,
            } => write!(
                f,
                "font container corrupt: wanted {} bytes at offset {:#x} but got {}",
                expected, offset, got
            ),
            LookupError::BufferTooSmall { needed, capacity } => write!(
                f,
                "glyph buffer too small: glyph needs {} bytes, buffer holds {}",
                needed, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LookupError {}
