/// Read-only access to the medium font containers live on.
///
/// Implementations block until the medium answers. Nothing here is ever written or closed.
pub trait FontStorage {
    type Handle;
    type Error: core::fmt::Debug;

    fn open(&mut self, path: &str) -> Result<Self::Handle, Self::Error>;

    /// Position `handle` at `offset` bytes from the start of its container.
    fn seek(&mut self, handle: &mut Self::Handle, offset: u32) -> Result<(), Self::Error>;

    /// Fill as much of `buf` as the container has from the current position and return how many
    /// bytes were read. Fewer than `buf.len()` means the container ended.
    fn read(&mut self, handle: &mut Self::Handle, buf: &mut [u8]) -> Result<usize, Self::Error>;
}
