//! Built-in ASCII glyphs so text stays legible with no external font loaded.
//!
//! Both tables hold 128 glyphs indexed by code (control codes are blank), one byte per row, MSB
//! leftmost.

use crate::BitLayout;

pub const LAYOUT: BitLayout = BitLayout::RowMsbLeft;

/// One fixed size ASCII table.
#[derive(Debug)]
pub struct AsciiTable {
    pub width: u16,
    pub height: u16,
    data: &'static [u8],
}

const DATA_6X12: &[u8; 128 * 12] = include_bytes!("fallback/ascii_6x12.bin");
const DATA_8X16: &[u8; 128 * 16] = include_bytes!("fallback/ascii_8x16.bin");

pub static ASCII_6X12: AsciiTable = AsciiTable {
    width: 6,
    height: 12,
    data: DATA_6X12,
};

pub static ASCII_8X16: AsciiTable = AsciiTable {
    width: 8,
    height: 16,
    data: DATA_8X16,
};

/// Largest glyph either table produces.
pub const MAX_GLYPH_BYTES: usize = 16;

impl AsciiTable {
    pub const fn glyph_bytes(&self) -> usize {
        self.height as usize
    }

    /// The glyph for `code`. Only the low 7 bits are used.
    pub fn glyph(&self, code: u8) -> &'static [u8] {
        let len = self.glyph_bytes();
        let start = usize::from(code & 0x7F) * len;
        &self.data[start..start + len]
    }
}

/// The table matching a font of the given pixel height. Only 12 and 16 exist, anything other
/// than 12 gets the 16 pixel table.
pub fn table_for_height(height: u16) -> &'static AsciiTable {
    if height == 12 {
        &ASCII_6X12
    } else {
        &ASCII_8X16
    }
}
