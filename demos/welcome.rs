use handwrite_gen::colours;
use handwrite_gen::layout::{self, Margins};
use handwrite_gen::{Canvas, Document, Font, Paper, Px, TextStyle};

fn main() {
    let font_path = std::env::args()
        .nth(1)
        .expect("usage: welcome <path-to-handwriting-font.ttf>");
    let font = std::fs::read(font_path).expect("can read font file");
    let font = Font::load(font).expect("can load font");

    let mut doc = Document::new();
    let font = doc.add_font(font);

    let mut canvas = Canvas::new(
        1000,
        707,
        Margins::all(Px(40.0)),
        Paper::solid(colours::PAPER_CREAM),
    );
    let style = TextStyle {
        font,
        size: Px(32.0),
        line_height: 1.8,
        colour: colours::BLUE_INK,
    };

    let text = "Welcome to the new and improved\nText to Handwriting converter!\n\nEnjoy the modern look, extra fonts,\nand beautiful paper styles.";
    layout::layout_text(&doc, &mut canvas, &style, text);

    let path = doc.export_png(&canvas, ".").expect("can export image");
    println!("wrote {}", path.display());
}
