use alloc::boxed::Box;
use embedded_storage::nor_flash;

pub const TEST_FLASH_SECTORS: usize = 16;
const TEST_FLASH_SIZE: usize = 4096 * TEST_FLASH_SECTORS;

/// Erased flash that tests program directly.
pub struct TestNorFlash(pub Box<[u8]>);

impl Default for TestNorFlash {
    fn default() -> Self {
        Self::new()
    }
}

impl TestNorFlash {
    pub fn new() -> Self {
        Self(alloc::vec![0xffu8; TEST_FLASH_SIZE].into_boxed_slice())
    }

    pub fn program(&mut self, offset: usize, bytes: &[u8]) {
        self.0[offset..offset + bytes.len()].copy_from_slice(bytes);
    }
}

impl nor_flash::ErrorType for TestNorFlash {
    type Error = core::convert::Infallible;
}

impl nor_flash::ReadNorFlash for TestNorFlash {
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        bytes.copy_from_slice(&self.0[offset as usize..offset as usize + bytes.len()]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        TEST_FLASH_SIZE
    }
}
