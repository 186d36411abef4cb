//! Fonts installed on the board. Container paths are relative to the font directory.
use dotfont_core::{max_glyph_bytes, BitLayout, ContainerFormat, FontDescriptor};

pub const FONTS: [FontDescriptor; 4] = [
    FontDescriptor {
        name: "song12",
        path: "font/song1212.dzk",
        format: ContainerFormat::Wjq,
        width: 12,
        height: 12,
        glyph_bytes: 24,
        layout: BitLayout::RowMsbLeft,
    },
    FontDescriptor {
        name: "song16",
        path: "font/song1616.dzk",
        format: ContainerFormat::Wjq,
        width: 16,
        height: 16,
        glyph_bytes: 32,
        layout: BitLayout::RowMsbLeft,
    },
    FontDescriptor {
        name: "hei16",
        path: "font/hei1616.gbk",
        format: ContainerFormat::Ymy,
        width: 16,
        height: 16,
        glyph_bytes: 32,
        layout: BitLayout::RowMsbLeft,
    },
    FontDescriptor {
        name: "kai24",
        path: "font/kai2424.zy",
        format: ContainerFormat::Zy,
        width: 24,
        height: 24,
        glyph_bytes: 72,
        layout: BitLayout::RowMsbLeft,
    },
];

pub const GLYPH_BUFFER_LEN: usize = max_glyph_bytes(&FONTS);
