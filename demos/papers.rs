use handwrite_gen::colours;
use handwrite_gen::image::{Rgba, RgbaImage};
use handwrite_gen::layout::{self, Margins};
use handwrite_gen::{Canvas, Colour, Document, Font, Paper, Px, TextStyle};

/// Build a small ruled-notebook texture to tile: cream paper with a faint
/// horizontal line at the bottom edge of each tile.
fn ruled_texture(line_spacing: u32) -> RgbaImage {
    let mut texture = RgbaImage::from_pixel(4, line_spacing, colours::PAPER_CREAM.to_rgba());
    for x in 0..texture.width() {
        texture.put_pixel(x, line_spacing - 1, Rgba([180, 196, 214, 255]));
    }
    texture
}

fn main() {
    let font_path = std::env::args()
        .nth(1)
        .expect("usage: papers <path-to-handwriting-font.ttf>");
    let font = std::fs::read(font_path).expect("can read font file");
    let font = Font::load(font).expect("can load font");

    let mut doc = Document::new();
    let font = doc.add_font(font);

    let size = Px(28.0);
    let line_height = 1.8;
    let text = "The same note, three papers:\nplain white, warm cream,\nand ruled notebook lines.";

    let papers = [
        ("plain", Paper::solid(colours::WHITE)),
        ("cream", Paper::solid(colours::PAPER_CREAM)),
        (
            "ruled",
            Paper::textured(ruled_texture((size * line_height).0 as u32)),
        ),
    ];

    for (name, paper) in papers {
        let mut canvas = Canvas::new(800, 500, Margins::all(Px(40.0)), paper);
        let style = TextStyle {
            font,
            size,
            line_height,
            colour: Colour::new_rgb_bytes(0x16, 0x21, 0x3e),
        };
        layout::layout_text(&doc, &mut canvas, &style, text);

        let image = doc.render(&canvas).expect("can render canvas");
        let path = format!("paper-{name}.png");
        image.save(&path).expect("can save image");
        println!("wrote {path}");
    }
}
