use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::BitLayout;

/// A resolved glyph written into a buffer the caller owns.
///
/// The buffer must hold the largest glyph of any registered font, see
/// [`max_glyph_bytes`](crate::max_glyph_bytes).
#[derive(Debug)]
pub struct GlyphBitmap<'b> {
    buf: &'b mut [u8],
    len: usize,
    layout: BitLayout,
    width: u16,
    height: u16,
}

impl<'b> GlyphBitmap<'b> {
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            layout: BitLayout::RowMsbLeft,
            width: 0,
            height: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of payload bytes, zero until a glyph has been written.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn layout(&self) -> BitLayout {
        self.layout
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }

    pub fn is_set(&self, x: u16, y: u16) -> bool {
        self.layout
            .is_set(self.bytes(), self.width, self.height, x, y)
    }

    /// Every set pixel, relative to the glyph's top left corner.
    pub fn pixels(&self) -> GlyphPixels<'_, 'b> {
        GlyphPixels {
            glyph: self,
            x: 0,
            y: 0,
        }
    }

    /// Drop whatever the buffer held so a failed read is never mistaken for a glyph.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
        self.width = 0;
        self.height = 0;
    }

    pub(crate) fn payload_mut(&mut self, len: usize) -> &mut [u8] {
        &mut self.buf[..len]
    }

    pub(crate) fn set_header(&mut self, len: usize, layout: BitLayout, width: u16, height: u16) {
        self.len = len;
        self.layout = layout;
        self.width = width;
        self.height = height;
    }

    pub(crate) fn copy_from(&mut self, data: &[u8], layout: BitLayout, width: u16, height: u16) {
        self.buf[..data.len()].copy_from_slice(data);
        self.set_header(data.len(), layout, width, height);
    }
}

/// Iterator over the set pixels of a [`GlyphBitmap`].
pub struct GlyphPixels<'a, 'b> {
    glyph: &'a GlyphBitmap<'b>,
    x: u16,
    y: u16,
}

impl Iterator for GlyphPixels<'_, '_> {
    type Item = Pixel<BinaryColor>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.y < self.glyph.height {
            let (x, y) = (self.x, self.y);
            self.x += 1;
            if self.x >= self.glyph.width {
                self.x = 0;
                self.y += 1;
            }
            if self.glyph.is_set(x, y) {
                let point = Point::new(i32::from(x), i32::from(y));
                return Some(Pixel(point, BinaryColor::On));
            }
        }
        None
    }
}
