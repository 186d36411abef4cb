use crate::format::ContainerFormat;

/// A font the board knows about. Lives in a compiled-in table for the life of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Matched exactly (case sensitive) by lookups.
    pub name: &'static str,
    /// Where the container lives on the storage collaborator.
    pub path: &'static str,
    pub format: ContainerFormat,
    /// Pixel width of a double byte glyph (two character cells).
    pub width: u16,
    pub height: u16,
    /// Bytes per glyph in the container.
    pub glyph_bytes: u16,
    pub layout: BitLayout,
}

/// How the pixels of a glyph are packed into its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitLayout {
    /// Each byte is 8 horizontal pixels, MSB leftmost. Rows are padded to whole bytes and run top
    /// to bottom.
    RowMsbLeft,
    /// Like [`BitLayout::RowMsbLeft`] but the LSB is leftmost.
    RowLsbLeft,
    /// Each byte is 8 vertical pixels, MSB topmost. Columns run left to right within 8 pixel high
    /// bands, bands run top to bottom.
    ColumnMsbTop,
    /// Like [`BitLayout::ColumnMsbTop`] but the LSB is topmost.
    ColumnLsbTop,
}

impl BitLayout {
    /// Whether pixel `(x, y)` is set in a `width` x `height` glyph packed in `data`.
    ///
    /// Pixels outside the glyph or outside `data` read as unset.
    pub fn is_set(self, data: &[u8], width: u16, height: u16, x: u16, y: u16) -> bool {
        if x >= width || y >= height {
            return false;
        }
        let (x, y, width) = (x as usize, y as usize, width as usize);
        let (index, bit) = match self {
            BitLayout::RowMsbLeft | BitLayout::RowLsbLeft => {
                let bytes_per_row = width.div_ceil(8);
                (y * bytes_per_row + x / 8, x % 8)
            }
            BitLayout::ColumnMsbTop | BitLayout::ColumnLsbTop => ((y / 8) * width + x, y % 8),
        };
        let shift = match self {
            BitLayout::RowMsbLeft | BitLayout::ColumnMsbTop => 7 - bit,
            BitLayout::RowLsbLeft | BitLayout::ColumnLsbTop => bit,
        };
        data.get(index)
            .is_some_and(|byte| (byte >> shift) & 0x01 == 0x01)
    }

    /// Bytes needed to pack a `width` x `height` glyph.
    pub const fn packed_len(self, width: u16, height: u16) -> usize {
        let (width, height) = (width as usize, height as usize);
        match self {
            BitLayout::RowMsbLeft | BitLayout::RowLsbLeft => width.div_ceil(8) * height,
            BitLayout::ColumnMsbTop | BitLayout::ColumnLsbTop => height.div_ceil(8) * width,
        }
    }
}

/// The largest glyph any of `fonts` or the built-in ASCII tables can produce.
///
/// Size the caller owned glyph buffer with this.
pub const fn max_glyph_bytes(fonts: &[FontDescriptor]) -> usize {
    let mut max = crate::fallback::MAX_GLYPH_BYTES;
    let mut i = 0;
    while i < fonts.len() {
        let bytes = fonts[i].glyph_bytes as usize;
        if bytes > max {
            max = bytes;
        }
        i += 1;
    }
    max
}
