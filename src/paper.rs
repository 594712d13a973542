use crate::{colour::Colour, error::RenderError};
use image::RgbaImage;
use std::path::Path;

/// The paper a canvas is drawn on: either a flat colour or a texture image
/// tiled edge-to-edge across the canvas.
///
/// Textures are decoded once, when the paper is constructed; rendering
/// never waits on a half-loaded image.
pub enum Paper {
    Solid(Colour),
    Textured(RgbaImage),
}

impl Paper {
    /// Paper of a single flat colour
    pub fn solid<C: Into<Colour>>(colour: C) -> Paper {
        Paper::Solid(colour.into())
    }

    /// Paper built from an already-decoded texture image
    pub fn textured(texture: RgbaImage) -> Paper {
        Paper::Textured(texture)
    }

    /// Load a paper texture from disk, decoding it with [image]. PNG and
    /// JPEG textures are supported.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Paper, RenderError> {
        let path = path.as_ref();
        let texture = image::open(path)?.to_rgba8();
        log::info!(
            "loaded paper texture {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );
        Ok(Paper::Textured(texture))
    }

    /// Fill the entire target image with this paper, tiling the texture in
    /// both directions when it is smaller than the canvas
    pub fn fill(&self, target: &mut RgbaImage) {
        match self {
            Paper::Solid(colour) => {
                let pixel = colour.to_rgba();
                for px in target.pixels_mut() {
                    *px = pixel;
                }
            }
            Paper::Textured(texture) => {
                if texture.width() == 0 || texture.height() == 0 {
                    return;
                }
                let (tw, th) = (texture.width(), texture.height());
                for y in 0..target.height() {
                    for x in 0..target.width() {
                        target.put_pixel(x, y, *texture.get_pixel(x % tw, y % th));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn solid_fill_covers_every_pixel() {
        let mut target = RgbaImage::new(4, 3);
        Paper::solid(colours::PAPER_CREAM).fill(&mut target);
        let expected = colours::PAPER_CREAM.to_rgba();
        assert!(target.pixels().all(|px| *px == expected));
    }

    #[test]
    fn texture_tiles_across_non_divisible_sizes() {
        // 3x2 checker-ish texture onto an 8x5 canvas
        let mut texture = RgbaImage::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                let v = (x * 50 + y * 100) as u8;
                texture.put_pixel(x, y, image::Rgba([v, v, v, 255]));
            }
        }

        let mut target = RgbaImage::new(8, 5);
        Paper::textured(texture.clone()).fill(&mut target);

        for y in 0..5 {
            for x in 0..8 {
                assert_eq!(target.get_pixel(x, y), texture.get_pixel(x % 3, y % 2));
            }
        }
    }
}
