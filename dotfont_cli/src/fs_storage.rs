use dotfont_core::FontStorage;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Font containers as files under a root directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where a container path lands on disk. Leading slashes don't escape the root.
    pub fn container_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl FontStorage for FsStorage {
    type Handle = File;
    type Error = io::Error;

    fn open(&mut self, path: &str) -> Result<Self::Handle, Self::Error> {
        File::open(self.container_path(path))
    }

    fn seek(&mut self, handle: &mut Self::Handle, offset: u32) -> Result<(), Self::Error> {
        handle.seek(SeekFrom::Start(u64::from(offset)))?;
        Ok(())
    }

    fn read(&mut self, handle: &mut Self::Handle, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut filled = 0;
        while filled < buf.len() {
            match handle.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_until_eof() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("font")).unwrap();
        let mut file = File::create(dir.path().join("font/test.dzk")).unwrap();
        file.write_all(&(0..100u8).collect::<Vec<_>>()).unwrap();

        let mut storage = FsStorage::new(dir.path());
        let mut handle = storage.open("/font/test.dzk").unwrap();
        storage.seek(&mut handle, 90).unwrap();
        let mut buf = [0u8; 32];
        assert_eq!(storage.read(&mut handle, &mut buf).unwrap(), 10);
        assert_eq!(&buf[..10], &(90..100u8).collect::<Vec<_>>()[..]);

        storage.seek(&mut handle, 500).unwrap();
        assert_eq!(storage.read(&mut handle, &mut buf).unwrap(), 0);
    }

    #[test]
    fn missing_container_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FsStorage::new(dir.path());
        assert_eq!(
            storage.open("font/none.dzk").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
