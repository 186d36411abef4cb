use super::AddressResolver;
use crate::{FontDescriptor, Region};

/// Placeholder for a vendor format whose addressing is not implemented. Nothing is ever found.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zy;

impl AddressResolver for Zy {
    fn glyph_offset(
        &self,
        _font: &FontDescriptor,
        _c1: u8,
        _c2: u8,
        _region: Region,
    ) -> Option<u32> {
        None
    }
}
