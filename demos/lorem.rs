use handwrite_gen::colours;
use handwrite_gen::layout::{self, Margins};
use handwrite_gen::{Canvas, Document, Font, Paper, Px, TextStyle};

fn main() {
    let font_path = std::env::args()
        .nth(1)
        .expect("usage: lorem <path-to-handwriting-font.ttf>");
    let font = std::fs::read(font_path).expect("can read font file");
    let font = Font::load(font).expect("can load font");

    let mut doc = Document::new();
    let font = doc.add_font(font);

    // a long run of prose to exercise the word wrap
    let text = format!("{}\n\n{}", lipsum::lipsum(40), lipsum::lipsum(60));

    let mut canvas = Canvas::new(
        1000,
        1414,
        Margins::all(Px(48.0)),
        Paper::solid(colours::PAPER_CREAM),
    );
    let style = TextStyle {
        font,
        size: Px(24.0),
        line_height: 1.6,
        colour: colours::BLACK,
    };
    layout::layout_text(&doc, &mut canvas, &style, &text);

    let mut out = std::fs::File::create("lorem.png").unwrap();
    doc.write_png(&canvas, &mut out).unwrap();
    println!("wrote lorem.png");
}
