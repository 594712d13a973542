use crate::colour::Colour;
use crate::font::Font;
use crate::layout::Margins;
use crate::paper::Paper;
use crate::rect::Rect;
use crate::units::Px;
use id_arena::Id;

/// The font and size a span of text is drawn with
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Px,
}

/// One laid-out line of text: the text itself, the font and size to draw
/// it with, the ink colour, and the coordinates of its top-left anchor
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Px, Px),
}

/// The immutable parameters of one layout pass: which font to use, the
/// font size in pixels, the line-height multiplier, and the ink colour.
///
/// `line_height` is deliberately a required field with no default: the
/// same value must feed both measurement and rendering, and a silent
/// fallback is exactly how those two drift apart.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub font: Id<Font>,
    pub size: Px,
    pub line_height: f32,
    pub colour: Colour,
}

/// A canvas to lay text out on: the full pixel size, the content box the
/// text is wrapped to (the size minus the margins), the selected paper,
/// and the spans accumulated by the most recent layout pass.
pub struct Canvas {
    /// The full size of the canvas
    pub media_box: Rect,
    /// Where text can live, i.e. within the margins
    pub content_box: Rect,
    /// The paper the canvas is drawn on
    pub paper: Paper,
    /// The laid out text
    pub spans: Vec<SpanLayout>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, margins: Margins, paper: Paper) -> Canvas {
        let (width, height) = (width as f32, height as f32);
        Canvas {
            media_box: Rect {
                x1: Px(0.0),
                y1: Px(0.0),
                x2: Px(width),
                y2: Px(height),
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.top,
                x2: Px(width) - margins.right,
                y2: Px(height) - margins.bottom,
            },
            paper,
            spans: Vec::default(),
        }
    }

    /// The canvas width in whole pixels
    pub fn width(&self) -> u32 {
        self.media_box.width().0.max(0.0).round() as u32
    }

    /// The canvas height in whole pixels
    pub fn height(&self) -> u32 {
        self.media_box.height().0.max(0.0).round() as u32
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.spans.push(span);
    }

    /// Discard the spans of a previous layout pass
    pub fn clear_spans(&mut self) {
        self.spans.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn content_box_subtracts_margins() {
        let canvas = Canvas::new(
            1000,
            707,
            Margins::all(Px(40.0)),
            Paper::solid(colours::WHITE),
        );
        assert_eq!(canvas.content_box.x1, Px(40.0));
        assert_eq!(canvas.content_box.y1, Px(40.0));
        assert_eq!(canvas.content_box.x2, Px(960.0));
        assert_eq!(canvas.content_box.y2, Px(667.0));
        assert_eq!(canvas.content_box.width(), Px(920.0));
        assert_eq!(canvas.width(), 1000);
        assert_eq!(canvas.height(), 707);
    }
}
