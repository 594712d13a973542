use crate::{
    canvas::{Canvas, SpanLayout},
    colour::Colour,
    error::RenderError,
    font::Font,
};
use id_arena::{Arena, Id};
use image::{ImageEncoder, RgbaImage};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// A document owns the loaded fonts and renders laid-out canvases to
/// images. Fonts are stored "globally" within the document, such that any
/// canvas can use them by referring to them by their [Id].
#[derive(Default)]
pub struct Document {
    pub fonts: Arena<Font>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    /// Add a font to the document, returning the id used to refer to it
    /// in [TextStyle](crate::TextStyle)s and spans
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        log::info!("loaded font '{}'", font.name());
        self.fonts.alloc(font)
    }

    /// Render a canvas to an image: fill the paper, then draw every span
    /// in ink over it. Returns [RenderError::EmptyCanvas] when the canvas
    /// has no pixels.
    pub fn render(&self, canvas: &Canvas) -> Result<RgbaImage, RenderError> {
        let (width, height) = (canvas.width(), canvas.height());
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas);
        }

        let mut image = RgbaImage::new(width, height);
        canvas.paper.fill(&mut image);
        for span in &canvas.spans {
            self.draw_span(&mut image, span);
        }

        log::debug!("rendered {} span(s) at {}x{}", canvas.spans.len(), width, height);
        Ok(image)
    }

    /// Draw one span glyph-by-glyph. The pen starts at the span's left
    /// edge and advances by the same per-character advance used for
    /// measurement, so wrapped lines render exactly as wide as they
    /// measured. The span's y-coordinate is the glyph-box top; the
    /// baseline sits one ascent below it.
    fn draw_span(&self, image: &mut RgbaImage, span: &SpanLayout) {
        let font = &self.fonts[span.font.id];
        let baseline = span.coords.1 + font.ascent(span.font.size);
        let mut pen = span.coords.0;

        for ch in span.text.chars() {
            let (metrics, coverage) = font.rasterize(ch, span.font.size);
            if metrics.width > 0 && metrics.height > 0 {
                let left = (pen.0 + metrics.xmin as f32).round() as i64;
                let top = (baseline.0 - metrics.height as f32 - metrics.ymin as f32).round() as i64;
                blit_glyph(image, &coverage, metrics.width, left, top, span.colour);
            }
            pen += font.char_advance(ch, span.font.size);
        }
    }

    /// Render a canvas and write it as a PNG to the given writer
    pub fn write_png<W: Write>(&self, canvas: &Canvas, writer: W) -> Result<(), RenderError> {
        let image = self.render(canvas)?;
        let encoder = image::codecs::png::PngEncoder::new(writer);
        encoder.write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }

    /// Render a canvas and save it in `dir` as a losslessly-encoded PNG
    /// named with a generation timestamp, `handwriting_<millis>.png`.
    /// Returns the path of the written file.
    pub fn export_png<P: AsRef<Path>>(
        &self,
        canvas: &Canvas,
        dir: P,
    ) -> Result<PathBuf, RenderError> {
        let image = self.render(canvas)?;
        let timestamp = chrono::Utc::now().timestamp_millis();
        let path = dir.as_ref().join(format!("handwriting_{timestamp}.png"));
        image.save(&path)?;
        log::info!("exported {}", path.display());
        Ok(path)
    }
}

/// Alpha-blend a glyph coverage bitmap into the image in the given ink
/// colour. Pixels outside the image bounds are skipped; descenders and
/// negative bearings may poke past the content box edges.
fn blit_glyph(
    image: &mut RgbaImage,
    coverage: &[u8],
    glyph_width: usize,
    left: i64,
    top: i64,
    colour: Colour,
) {
    if glyph_width == 0 {
        return;
    }
    let ink = colour.to_rgba();
    for (i, &alpha) in coverage.iter().enumerate() {
        if alpha == 0 {
            continue;
        }
        let x = left + (i % glyph_width) as i64;
        let y = top + (i / glyph_width) as i64;
        if x < 0 || y < 0 || x >= i64::from(image.width()) || y >= i64::from(image.height()) {
            continue;
        }
        let px = image.get_pixel_mut(x as u32, y as u32);
        let a = f32::from(alpha) / 255.0;
        for c in 0..3 {
            px.0[c] = (f32::from(ink.0[c]) * a + f32::from(px.0[c]) * (1.0 - a)).round() as u8;
        }
        px.0[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::layout::Margins;
    use crate::paper::Paper;
    use crate::units::Px;

    #[test]
    fn zero_area_canvas_refuses_to_render() {
        let document = Document::new();
        let canvas = Canvas::new(0, 0, Margins::empty(), Paper::solid(colours::WHITE));
        assert!(matches!(
            document.render(&canvas),
            Err(RenderError::EmptyCanvas)
        ));
    }

    #[test]
    fn renders_bare_paper_when_there_are_no_spans() {
        let document = Document::new();
        let canvas = Canvas::new(
            4,
            3,
            Margins::all(Px(1.0)),
            Paper::solid(colours::PAPER_CREAM),
        );
        let image = document.render(&canvas).unwrap();
        let expected = colours::PAPER_CREAM.to_rgba();
        assert!(image.pixels().all(|px| *px == expected));
    }

    #[test]
    fn blit_clips_to_image_bounds() {
        let mut image = RgbaImage::from_pixel(2, 2, colours::WHITE.to_rgba());
        // a 3x3 fully-opaque glyph hanging off the top-left corner
        blit_glyph(&mut image, &[255u8; 9], 3, -1, -1, colours::BLACK);
        assert_eq!(*image.get_pixel(0, 0), colours::BLACK.to_rgba());
        assert_eq!(*image.get_pixel(1, 1), colours::BLACK.to_rgba());
    }
}
