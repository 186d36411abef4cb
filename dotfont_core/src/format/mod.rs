//! Vendor container formats.
//!
//! Each format alone knows how its container lays out glyphs, and turns a classified character
//! into the byte offset of that character's glyph. A character the container does not carry
//! resolves to `None`, which is an ordinary outcome and not an error.

mod wjq;
mod ymy;
mod zy;

pub use wjq::Wjq;
pub use ymy::Ymy;
pub use zy::Zy;

use crate::{FontDescriptor, Region};

/// Maps a character to where its glyph starts inside a container.
pub trait AddressResolver {
    fn glyph_offset(&self, font: &FontDescriptor, c1: u8, c2: u8, region: Region) -> Option<u32>;
}

/// The container format tag carried by a [`FontDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    /// GB2312 style 94x94 table.
    Wjq,
    /// Full GBK table.
    Ymy,
    /// Not implemented yet, every character is absent.
    Zy,
}

impl ContainerFormat {
    pub fn resolver(self) -> &'static dyn AddressResolver {
        match self {
            ContainerFormat::Wjq => &Wjq,
            ContainerFormat::Ymy => &Ymy,
            ContainerFormat::Zy => &Zy,
        }
    }
}

/// `cell * glyph_bytes`, or `None` if that overflows the container's address space.
fn cell_offset(font: &FontDescriptor, cell: u32) -> Option<u32> {
    cell.checked_mul(u32::from(font.glyph_bytes))
}
