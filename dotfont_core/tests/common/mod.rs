#![allow(dead_code)]
use dotfont_core::{BitLayout, ContainerFormat, FontDescriptor, FontStorage};
use std::collections::BTreeMap;

pub const SONG12: FontDescriptor = FontDescriptor {
    name: "song12",
    path: "font/song1212.dzk",
    format: ContainerFormat::Wjq,
    width: 12,
    height: 12,
    glyph_bytes: 24,
    layout: BitLayout::RowMsbLeft,
};

pub const SONG16: FontDescriptor = FontDescriptor {
    name: "song16",
    path: "font/song1616.dzk",
    format: ContainerFormat::Wjq,
    width: 16,
    height: 16,
    glyph_bytes: 32,
    layout: BitLayout::RowMsbLeft,
};

pub const HEI16: FontDescriptor = FontDescriptor {
    name: "hei16",
    path: "font/hei1616.gbk",
    format: ContainerFormat::Ymy,
    width: 16,
    height: 16,
    glyph_bytes: 32,
    layout: BitLayout::ColumnMsbTop,
};

pub const KAI24: FontDescriptor = FontDescriptor {
    name: "kai24",
    path: "font/kai2424.zy",
    format: ContainerFormat::Zy,
    width: 24,
    height: 24,
    glyph_bytes: 72,
    layout: BitLayout::RowMsbLeft,
};

pub const FONTS: [FontDescriptor; 4] = [SONG12, SONG16, HEI16, KAI24];

/// Offset of 啊 (B0A1) in a 16x16 WJQ container.
pub const SONG16_B0A1: u32 = 15 * 94 * 32;

/// A glyph sized pattern that is different for every offset.
pub fn pattern(offset: u32, len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (offset as usize + i).wrapping_mul(31) as u8 ^ 0x5A)
        .collect()
}

/// Containers held in memory, keyed by path. Counts how often each path was opened.
#[derive(Debug, Default)]
pub struct MemStorage {
    containers: BTreeMap<String, Vec<u8>>,
    opens: BTreeMap<String, usize>,
}

#[derive(Debug)]
pub struct MemHandle {
    path: String,
    pos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemError {
    NoSuchContainer(String),
}

impl MemStorage {
    pub fn insert(&mut self, path: &str, bytes: Vec<u8>) {
        self.containers.insert(path.to_string(), bytes);
    }

    /// Store a container of `len` zero bytes with `glyph` written at `offset`.
    pub fn insert_with_glyph(&mut self, path: &str, len: usize, offset: u32, glyph: &[u8]) {
        let mut bytes = vec![0u8; len];
        let offset = offset as usize;
        bytes[offset..offset + glyph.len()].copy_from_slice(glyph);
        self.insert(path, bytes);
    }

    pub fn truncate(&mut self, path: &str, len: usize) {
        if let Some(bytes) = self.containers.get_mut(path) {
            bytes.truncate(len);
        }
    }

    pub fn opens(&self, path: &str) -> usize {
        self.opens.get(path).copied().unwrap_or(0)
    }
}

impl FontStorage for MemStorage {
    type Handle = MemHandle;
    type Error = MemError;

    fn open(&mut self, path: &str) -> Result<Self::Handle, Self::Error> {
        *self.opens.entry(path.to_string()).or_default() += 1;
        if self.containers.contains_key(path) {
            Ok(MemHandle {
                path: path.to_string(),
                pos: 0,
            })
        } else {
            Err(MemError::NoSuchContainer(path.to_string()))
        }
    }

    fn seek(&mut self, handle: &mut Self::Handle, offset: u32) -> Result<(), Self::Error> {
        handle.pos = offset as usize;
        Ok(())
    }

    fn read(&mut self, handle: &mut Self::Handle, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let bytes = self
            .containers
            .get(&handle.path)
            .ok_or_else(|| MemError::NoSuchContainer(handle.path.clone()))?;
        let available = bytes.len().saturating_sub(handle.pos);
        let n = available.min(buf.len());
        if n == 0 {
            return Ok(0);
        }
        buf[..n].copy_from_slice(&bytes[handle.pos..handle.pos + n]);
        handle.pos += n;
        Ok(n)
    }
}
