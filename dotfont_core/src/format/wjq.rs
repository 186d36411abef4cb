use super::{cell_offset, AddressResolver};
use crate::{FontDescriptor, Region};

/// Cells per row of a GB2312 style table (trail bytes 0xA1..=0xFE).
const ROW_CELLS: u32 = 94;

/// Containers holding the GB2312 symbol and hanzi zones as one 94x94 table starting at A1A1.
///
/// The unassigned rows AA–AF stay in the table as padding, so a glyph's cell is simply its row
/// and column relative to A1A1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wjq;

impl AddressResolver for Wjq {
    fn glyph_offset(&self, font: &FontDescriptor, c1: u8, c2: u8, region: Region) -> Option<u32> {
        match region {
            Region::Gbk1 | Region::Gbk2 => {
                let row = u32::from(c1.checked_sub(0xA1)?);
                let col = u32::from(c2.checked_sub(0xA1)?);
                cell_offset(font, row * ROW_CELLS + col)
            }
            _ => None,
        }
    }
}
