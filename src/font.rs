use crate::{error::RenderError, units::Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed font object. Fonts can be TTF or OTF fonts. The same font data
/// is parsed twice: once with [owned_ttf_parser] for metrics and text
/// measurement, and once with [fontdue] for CPU glyph rasterization, so
/// that measurement and rendering always agree on glyph geometry.
///
/// Typically, fonts are referred to throughout user applications by their
/// [id_arena::Id] within the [Document](crate::Document), and not by any
/// typed references.
pub struct Font {
    pub face: OwnedFace,
    raster: fontdue::Font,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, RenderError> {
        let raster = fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default())
            .map_err(RenderError::MalformedFont)?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face, raster })
    }

    /// Obtain the full name of the font. Panics if the font does not have a name
    pub fn name(&self) -> String {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
            .expect("font face has a name")
    }

    /// Obtain the family name of the font. Panics if the font does not have a font family
    pub fn family(&self) -> String {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
            .expect("font face has a family")
    }

    fn scaling(&self, size: Px) -> Px {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Resolve a character to a glyph, substituting the replacement
    /// character (or `.notdef`) for characters the font has no glyph for
    fn resolved_glyph(&self, ch: char) -> GlyphId {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .unwrap_or(GlyphId(0))
    }

    /// The horizontal advance of a single character at the given font size
    pub fn char_advance(&self, ch: char, size: Px) -> Px {
        let gid = self.resolved_glyph(ch);
        self.scaling(size)
            * self
                .face
                .as_face_ref()
                .glyph_hor_advance(gid)
                .unwrap_or_default() as f32
    }

    /// Calculate the rendered width of a given string of text at the given
    /// font size. This is the measurement function consumed by
    /// [layout::wrap](crate::layout::wrap): the sum of glyph horizontal
    /// advances, which is monotonic-nondecreasing under character append.
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        text.chars().map(|ch| self.char_advance(ch, size)).sum()
    }

    /// Rasterize a single character at the given size, returning its
    /// metrics and an alpha coverage bitmap of `width * height` bytes
    pub fn rasterize(&self, ch: char, size: Px) -> (fontdue::Metrics, Vec<u8>) {
        self.raster.rasterize(ch, size.0)
    }
}
