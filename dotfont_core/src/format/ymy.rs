use super::{cell_offset, AddressResolver};
use crate::{FontDescriptor, Region};

/// Cells per row of the full GBK table: trail bytes 0x40..=0xFE without 0x7F.
const ROW_CELLS: u32 = 190;

/// Containers holding the whole GBK code space as one table starting at 8140.
///
/// Every double byte zone and the user defined area inside the table are addressable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ymy;

impl AddressResolver for Ymy {
    fn glyph_offset(&self, font: &FontDescriptor, c1: u8, c2: u8, region: Region) -> Option<u32> {
        if !(region.is_double_byte_zone() || region == Region::User) {
            return None;
        }
        if !(0x81..=0xFE).contains(&c1) || !(0x40..=0xFE).contains(&c2) {
            return None;
        }
        let row = u32::from(c1 - 0x81);
        let mut col = u32::from(c2 - 0x40);
        if c2 > 0x7F {
            col -= 1;
        }
        cell_offset(font, row * ROW_CELLS + col)
    }
}
