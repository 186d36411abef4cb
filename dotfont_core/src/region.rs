//! Classification of a GBK/GB18030 lead and trail byte into its encoding zone.

/// The encoding zone a character code falls in.
///
/// The five double byte zones are the ones published with GBK. `Gbk2` is the GB2312 hanzi block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Single byte, `c1 < 0x80`.
    Ascii,
    /// GBK/1 symbols, A1A1–A9FE.
    Gbk1,
    /// GBK/2 GB2312 hanzi, B0A1–F7FE.
    Gbk2,
    /// GBK/3 hanzi, 8140–A0FE.
    Gbk3,
    /// GBK/4 hanzi, AA40–FEA0.
    Gbk4,
    /// GBK/5 symbols, A840–A9A0.
    Gbk5,
    /// GB18030 four byte sequence (81308130–8439FE39). The caller consumes 4 bytes.
    QuadByte,
    /// Trail byte 0x7F which no zone defines.
    Undefined,
    /// Everything else, left to each font's private use glyphs.
    User,
}

impl Region {
    /// Classify a character by its first two bytes.
    ///
    /// Total over every byte pair. ASCII and the undefined trail byte are decided before any zone
    /// is tested.
    pub const fn classify(c1: u8, c2: u8) -> Self {
        if c1 < 0x80 {
            return Region::Ascii;
        }
        if c2 == 0x7F {
            return Region::Undefined;
        }

        match (c1, c2) {
            (0xA1..=0xA9, 0xA1..=0xFE) => Region::Gbk1,
            (0xB0..=0xF7, 0xA1..=0xFE) => Region::Gbk2,
            (0x81..=0xA0, 0x40..=0xFE) => Region::Gbk3,
            (0xAA..=0xFE, 0x40..=0xA0) => Region::Gbk4,
            (0xA8..=0xA9, 0x40..=0xA0) => Region::Gbk5,
            (_, 0x30..=0x39) => Region::QuadByte,
            _ => Region::User,
        }
    }

    /// Number of input bytes a character in this region occupies.
    pub const fn byte_width(self) -> ByteWidth {
        match self {
            Region::Ascii => ByteWidth::Single,
            Region::QuadByte => ByteWidth::Quad,
            _ => ByteWidth::Double,
        }
    }

    pub const fn is_double_byte_zone(self) -> bool {
        matches!(
            self,
            Region::Gbk1 | Region::Gbk2 | Region::Gbk3 | Region::Gbk4 | Region::Gbk5
        )
    }
}

/// How far the caller advances its text cursor after a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ByteWidth {
    Single = 1,
    Double = 2,
    Quad = 4,
}

impl ByteWidth {
    pub const fn bytes(self) -> usize {
        self as usize
    }
}
