use dotfont_core::FontStorage;
use embedded_storage::nor_flash::{NorFlashErrorKind, ReadNorFlash};

use crate::{FlashPartition, ERASED_BYTE};

/// Length of the probe at the start of a partition that decides whether a container was flashed.
const ERASED_PROBE_LEN: usize = 4;

/// A font container flashed onto its own partition, found by the path fonts are registered with.
#[derive(Debug)]
pub struct FontPartition<'a, S> {
    pub path: &'static str,
    pub partition: FlashPartition<'a, S>,
}

impl<S> Clone for FontPartition<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for FontPartition<'_, S> {}

/// Serves font containers straight out of NOR flash.
#[derive(Debug)]
pub struct FlashFontStorage<'a, S, const N: usize> {
    mounts: [FontPartition<'a, S>; N],
}

/// An open container and the read position within it.
#[derive(Debug)]
pub struct FlashFontHandle<'a, S> {
    partition: FlashPartition<'a, S>,
    pos: u32,
}

impl<S> FlashFontHandle<'_, S> {
    pub fn position(&self) -> u32 {
        self.pos
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashFontError {
    /// No partition carries this path.
    NotMounted,
    /// The partition is there but nothing was ever flashed to it.
    Erased,
    SeekOutOfBounds { offset: u32, size: u32 },
    Flash(NorFlashErrorKind),
}

impl core::fmt::Display for FlashFontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlashFontError::NotMounted => write!(f, "no font partition for this path"),
            FlashFontError::Erased => write!(f, "font partition is erased"),
            FlashFontError::SeekOutOfBounds { offset, size } => write!(
                f,
                "seek to {:#x} is past the end of a {} byte partition",
                offset, size
            ),
            FlashFontError::Flash(kind) => write!(f, "flash error: {:?}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FlashFontError {}

impl<'a, S: ReadNorFlash, const N: usize> FlashFontStorage<'a, S, N> {
    pub fn new(mounts: [FontPartition<'a, S>; N]) -> Self {
        Self { mounts }
    }

    pub fn mounts(&self) -> &[FontPartition<'a, S>] {
        &self.mounts
    }
}

impl<'a, S: ReadNorFlash, const N: usize> FontStorage for FlashFontStorage<'a, S, N> {
    type Handle = FlashFontHandle<'a, S>;
    type Error = FlashFontError;

    fn open(&mut self, path: &str) -> Result<Self::Handle, Self::Error> {
        let mount = self
            .mounts
            .iter()
            .find(|mount| mount.path == path)
            .ok_or(FlashFontError::NotMounted)?;
        let partition = mount.partition;
        let probe = ERASED_PROBE_LEN.min(partition.size() as usize);
        if partition
            .is_erased_at(0, probe)
            .map_err(FlashFontError::Flash)?
        {
            return Err(FlashFontError::Erased);
        }
        Ok(FlashFontHandle { partition, pos: 0 })
    }

    fn seek(&mut self, handle: &mut Self::Handle, offset: u32) -> Result<(), Self::Error> {
        let size = handle.partition.size();
        if offset > size {
            return Err(FlashFontError::SeekOutOfBounds { offset, size });
        }
        handle.pos = offset;
        Ok(())
    }

    fn read(&mut self, handle: &mut Self::Handle, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let available = (handle.partition.size() - handle.pos) as usize;
        let n = available.min(buf.len());
        handle
            .partition
            .read(handle.pos, &mut buf[..n])
            .map_err(FlashFontError::Flash)?;
        handle.pos += n as u32;
        Ok(n)
    }
}
