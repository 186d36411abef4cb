use dotfont_core::{ByteWidth, FontRegistry, FontStorage, GlyphBitmap, LookupError};

use crate::board::GLYPH_BUFFER_LEN;

/// One character of a resolved byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChar {
    /// Where the character starts in the input.
    pub offset: usize,
    pub width: ByteWidth,
    /// `None` when the font has no glyph for the character.
    pub art: Option<String>,
}

/// Draw a glyph as rows of `#` and `.`.
pub fn glyph_art(glyph: &GlyphBitmap<'_>) -> String {
    let mut art = String::new();
    for y in 0..glyph.height() {
        for x in 0..glyph.width() {
            art.push(if glyph.is_set(x, y) { '#' } else { '.' });
        }
        art.push('\n');
    }
    art
}

/// Walk `text` one character at a time the way a text renderer would, advancing by the width
/// each lookup reports.
pub fn render_text<S: FontStorage, const N: usize>(
    registry: &mut FontRegistry<'_, S, N>,
    font: &str,
    text: &[u8],
) -> Result<Vec<RenderedChar>, (usize, LookupError)> {
    let mut buf = [0u8; GLYPH_BUFFER_LEN];
    let mut rendered = vec![];
    let mut offset = 0;
    while offset < text.len() {
        let mut glyph = GlyphBitmap::new(&mut buf);
        let width = registry
            .resolve_glyph(font, &text[offset..], &mut glyph)
            .map_err(|e| (offset, e))?;
        let art = (!glyph.is_empty()).then(|| glyph_art(&glyph));
        rendered.push(RenderedChar { offset, width, art });
        offset += width.bytes();
    }
    Ok(rendered)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{board::FONTS, fs_storage::FsStorage};
    use dotfont_core::fallback;

    #[test]
    fn art_matches_builtin_glyph() {
        let mut buf = [0u8; GLYPH_BUFFER_LEN];
        let dir = tempfile::tempdir().unwrap();
        let mut registry = FontRegistry::new(FsStorage::new(dir.path()), &FONTS);
        let mut glyph = GlyphBitmap::new(&mut buf);
        registry.resolve_glyph("song12", b"I", &mut glyph).unwrap();

        let art = glyph_art(&glyph);
        let rows = art.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|row| row.len() == 6));
        let expected_ink = fallback::ASCII_6X12
            .glyph(b'I')
            .iter()
            .map(|row| row.count_ones() as usize)
            .sum::<usize>();
        assert_eq!(art.matches('#').count(), expected_ink);
    }

    #[test]
    fn walks_mixed_text() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("font")).unwrap();
        let mut container = vec![0u8; 94 * 94 * 32];
        let b0a1 = 15 * 94 * 32;
        container[b0a1..b0a1 + 32].fill(0xff);
        std::fs::write(dir.path().join("font/song1616.dzk"), container).unwrap();
        let mut registry = FontRegistry::new(FsStorage::new(dir.path()), &FONTS);

        let text = [b'A', 0xB0, 0xA1, 0x81, 0x30, 0x81, 0x30, 0x81, 0x40];
        let rendered = render_text(&mut registry, "song16", &text).unwrap();
        let summary = rendered
            .iter()
            .map(|c| (c.offset, c.width.bytes(), c.art.is_some()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            [(0, 1, true), (1, 2, true), (3, 4, false), (7, 2, false)]
        );
        // a solid glyph
        let hanzi = rendered[1].art.as_ref().unwrap();
        assert_eq!(hanzi.matches('#').count(), 256);
    }

    #[test]
    fn missing_container_stops_at_first_hanzi() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = FontRegistry::new(FsStorage::new(dir.path()), &FONTS);
        let text = [b'o', b'k', 0xB0, 0xA1];
        assert_eq!(
            render_text(&mut registry, "song16", &text),
            Err((2, LookupError::StorageUnavailable))
        );
    }
}
