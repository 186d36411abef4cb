use core::cell::RefCell;
use embedded_storage::nor_flash::{NorFlashError, NorFlashErrorKind, ReadNorFlash};

/// A read-only, sector aligned window onto flash shared through a `RefCell`.
pub struct FlashPartition<'a, S> {
    pub tag: &'static str,
    offset_sector: u32,
    n_sectors: u32,
    flash: &'a RefCell<S>,
}

impl<S> core::fmt::Debug for FlashPartition<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlashPartition")
            .field("tag", &self.tag)
            .field("offset_sector", &self.offset_sector)
            .field("n_sectors", &self.n_sectors)
            .finish()
    }
}

// Clone won't derive for some reason
impl<S> Clone for FlashPartition<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for FlashPartition<'_, S> {}
pub const SECTOR_SIZE: usize = 4096;

/// Erased NOR flash reads back as this.
pub const ERASED_BYTE: u8 = 0xff;

impl<'a, S: ReadNorFlash> FlashPartition<'a, S> {
    pub fn new(
        flash: &'a RefCell<S>,
        offset_sector: u32,
        n_sectors: u32,
        tag: &'static str,
    ) -> Self {
        Self {
            tag,
            offset_sector,
            n_sectors,
            flash,
        }
    }

    pub fn read(&self, offset: u32, bytes: &mut [u8]) -> Result<(), NorFlashErrorKind> {
        if offset.saturating_add(bytes.len() as u32) > self.size() {
            return Err(NorFlashErrorKind::OutOfBounds);
        }
        let abs_offset = offset + self.offset_sector * SECTOR_SIZE as u32;

        ReadNorFlash::read(&mut *self.flash.borrow_mut(), abs_offset, bytes)
            .map_err(|e| e.kind())?;
        Ok(())
    }

    /// splits n_sectors off the end of the parition into a new parition
    pub fn split_off_end(&mut self, n_sectors: u32, tag: &'static str) -> FlashPartition<'a, S> {
        assert!(n_sectors <= self.n_sectors);
        self.n_sectors -= n_sectors;
        let new_offset_sector = self.offset_sector + self.n_sectors;

        FlashPartition {
            tag,
            offset_sector: new_offset_sector,
            n_sectors,
            flash: self.flash,
        }
    }

    /// splits n_sectors off the front of the parition into a new partition
    pub fn split_off_front(&mut self, n_sectors: u32, tag: &'static str) -> FlashPartition<'a, S> {
        assert!(n_sectors <= self.n_sectors);
        let own_tag = self.tag;
        let mut end = self.split_off_end(self.n_sectors - n_sectors, own_tag);
        // make the end the front
        core::mem::swap(self, &mut end);
        end.tag = tag;
        end
    }

    /// Whether the `len` bytes at `offset` all read back erased.
    pub fn is_erased_at(&self, offset: u32, len: usize) -> Result<bool, NorFlashErrorKind> {
        let mut buf = [0u8; 16];
        let mut pos = offset;
        let end = offset.saturating_add(len as u32);
        while pos < end {
            let chunk = ((end - pos) as usize).min(buf.len());
            self.read(pos, &mut buf[..chunk])?;
            if buf[..chunk].iter().any(|byte| *byte != ERASED_BYTE) {
                return Ok(false);
            }
            pos += chunk as u32;
        }
        Ok(true)
    }

    pub fn n_sectors(&self) -> u32 {
        self.n_sectors
    }

    /// size in bytes
    pub fn size(&self) -> u32 {
        self.n_sectors * SECTOR_SIZE as u32
    }
}
