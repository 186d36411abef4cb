use crate::{fallback, ByteWidth, FontDescriptor, FontStorage, GlyphBitmap, LookupError, Region};

/// Extent reported for a font that isn't registered.
pub const DEFAULT_EXTENT: (u16, u16) = (12, 12);

/// Where a font's container handle is at.
///
/// `Open` is terminal: the handle is reused for every later lookup and never closed. `OpenFailed`
/// is retried on the next lookup by name.
#[derive(Debug)]
pub enum HandleState<H> {
    Unopened,
    Open(H),
    OpenFailed,
}

/// A registered font and its lazily opened container.
#[derive(Debug)]
pub struct FontSlot<'a, H> {
    descriptor: &'a FontDescriptor,
    state: HandleState<H>,
}

impl<'a, H> FontSlot<'a, H> {
    pub fn descriptor(&self) -> &'a FontDescriptor {
        self.descriptor
    }

    pub fn state(&self) -> &HandleState<H> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, HandleState::Open(_))
    }
}

/// Every font the board knows about, bound to the storage their containers live on.
///
/// Built once at startup and handed by reference to whatever renders text. There is no internal
/// locking: callers on a preemptive scheduler must serialize access to the whole registry
/// themselves, otherwise two first lookups of a font can race on opening its container.
pub struct FontRegistry<'a, S: FontStorage, const N: usize> {
    storage: S,
    slots: [FontSlot<'a, S::Handle>; N],
}

impl<'a, S: FontStorage, const N: usize> FontRegistry<'a, S, N> {
    pub fn new(storage: S, fonts: &'a [FontDescriptor; N]) -> Self {
        Self {
            storage,
            slots: core::array::from_fn(|i| FontSlot {
                descriptor: &fonts[i],
                state: HandleState::Unopened,
            }),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn slots(&self) -> &[FontSlot<'a, S::Handle>] {
        &self.slots
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &'a FontDescriptor> + '_ {
        self.slots.iter().map(|slot| slot.descriptor)
    }

    /// Find a font by exact name, opening its container if that hasn't succeeded yet.
    ///
    /// A container that fails to open still returns the slot; lookups against it fail until a
    /// later call manages to open it.
    pub fn find_font(&mut self, name: &str) -> Option<&FontSlot<'a, S::Handle>> {
        let index = self.find_index(name)?;
        Some(&self.slots[index])
    }

    fn find_index(&mut self, name: &str) -> Option<usize> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.descriptor.name == name)?;
        let slot = &mut self.slots[index];
        if !slot.is_open() {
            slot.state = match self.storage.open(slot.descriptor.path) {
                Ok(handle) => HandleState::Open(handle),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::event!(
                        tracing::Level::WARN,
                        font = slot.descriptor.name,
                        path = slot.descriptor.path,
                        error = ?_e,
                        "could not open font container"
                    );
                    HandleState::OpenFailed
                }
            };
        }
        Some(index)
    }

    /// Resolve the glyph for the character at the start of `chars` into `glyph`.
    ///
    /// Returns how many bytes of `chars` the character occupies (1, 2 or 4), which is how far
    /// the caller advances through its text whether or not a glyph was found. When the font has
    /// no glyph for the character `glyph` is left untouched and the width is still returned.
    ///
    /// ASCII always comes from the built-in tables, no matter what the font's container holds
    /// or whether it opened. Bytes past the end of `chars` read as 0.
    pub fn resolve_glyph(
        &mut self,
        font_name: &str,
        chars: &[u8],
        glyph: &mut GlyphBitmap<'_>,
    ) -> Result<ByteWidth, LookupError> {
        let index = self
            .find_index(font_name)
            .ok_or(LookupError::FontNotFound)?;
        let slot = &mut self.slots[index];
        let font = slot.descriptor;

        let c1 = chars.first().copied().unwrap_or(0);
        let c2 = chars.get(1).copied().unwrap_or(0);
        let region = Region::classify(c1, c2);

        if region == Region::Ascii {
            let table = fallback::table_for_height(font.height);
            let data = table.glyph(c1);
            if data.len() > glyph.capacity() {
                return Err(LookupError::BufferTooSmall {
                    needed: data.len(),
                    capacity: glyph.capacity(),
                });
            }
            glyph.copy_from(data, fallback::LAYOUT, table.width, table.height);
            return Ok(ByteWidth::Single);
        }

        let handle = match &mut slot.state {
            HandleState::Open(handle) => handle,
            HandleState::Unopened | HandleState::OpenFailed => {
                return Err(LookupError::StorageUnavailable)
            }
        };

        let width = region.byte_width();
        let offset = match font.format.resolver().glyph_offset(font, c1, c2, region) {
            Some(offset) => offset,
            None => {
                #[cfg(feature = "tracing")]
                tracing::event!(
                    tracing::Level::DEBUG,
                    font = font.name,
                    c1,
                    c2,
                    ?region,
                    "no glyph in container"
                );
                return Ok(width);
            }
        };

        let len = usize::from(font.glyph_bytes);
        if len > glyph.capacity() {
            return Err(LookupError::BufferTooSmall {
                needed: len,
                capacity: glyph.capacity(),
            });
        }

        let read = match self.storage.seek(handle, offset) {
            Ok(()) => self.storage.read(handle, glyph.payload_mut(len)),
            Err(e) => Err(e),
        };

        match read {
            Ok(got) if got >= len => {
                glyph.set_header(len, font.layout, font.width, font.height);
                Ok(width)
            }
            Ok(got) => {
                #[cfg(feature = "tracing")]
                tracing::event!(
                    tracing::Level::WARN,
                    font = font.name,
                    offset,
                    expected = len,
                    got,
                    "short read from font container"
                );
                glyph.clear();
                Err(LookupError::StorageCorrupt {
                    offset,
                    expected: len,
                    got,
                })
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::event!(
                    tracing::Level::WARN,
                    font = font.name,
                    offset,
                    error = ?_e,
                    "font container read failed"
                );
                glyph.clear();
                Err(LookupError::StorageCorrupt {
                    offset,
                    expected: len,
                    got: 0,
                })
            }
        }
    }

    /// Pixel width of one character cell and the line height of a font.
    ///
    /// Double byte glyphs are declared two cells wide so the width is halved. An unknown font
    /// reports [`DEFAULT_EXTENT`] so layout code never has to handle a missing font.
    pub fn glyph_extent(&mut self, font_name: &str) -> (u16, u16) {
        match self.find_font(font_name) {
            Some(slot) => (slot.descriptor.width / 2, slot.descriptor.height),
            None => DEFAULT_EXTENT,
        }
    }
}
