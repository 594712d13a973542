use anyhow::{Context, Result};
use clap::Parser;
use handwrite_gen::{
    layout::{self, Margins},
    Canvas, Colour, Document, Font, Paper, Px, TextStyle,
};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

const WELCOME_TEXT: &str = "Welcome to the new and improved\nText to Handwriting converter!\n\nEnjoy the modern look, extra fonts,\nand beautiful paper styles.";

/// Render text as handwriting on paper and export it as a PNG
#[derive(Parser, Debug)]
#[command(name = "handwrite", version)]
struct Args {
    /// Text to render; when absent, --file or piped stdin is used instead
    text: Option<String>,

    /// Read the text to render from a file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Path to the handwriting TTF/OTF font
    #[arg(long)]
    font: PathBuf,

    /// Font size in pixels
    #[arg(long, default_value_t = 32.0)]
    size: f32,

    /// Line height as a multiple of the font size
    #[arg(long, default_value_t = 1.8)]
    line_height: f32,

    /// Ink colour as #rrggbb
    #[arg(long, default_value = "#16213e")]
    colour: String,

    /// Paper style: a #rrggbb colour, or a path to a texture image to tile
    #[arg(long, default_value = "#fdfbf3")]
    paper: String,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 707)]
    height: u32,

    /// Blank margin around the text, in pixels
    #[arg(long, default_value_t = 40.0)]
    padding: f32,

    /// Directory the timestamped PNG is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Log progress while rendering
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let text = read_text(&args)?;

    let bytes = std::fs::read(&args.font)
        .with_context(|| format!("could not read font file {}", args.font.display()))?;
    let font = Font::load(bytes).context("could not parse font")?;

    let mut document = Document::new();
    let font = document.add_font(font);

    let paper = if args.paper.starts_with('#') {
        Paper::solid(Colour::from_hex(&args.paper)?)
    } else {
        Paper::from_path(&args.paper)
            .with_context(|| format!("could not load paper texture {}", args.paper))?
    };

    let mut canvas = Canvas::new(args.width, args.height, Margins::all(Px(args.padding)), paper);
    let style = TextStyle {
        font,
        size: Px(args.size),
        line_height: args.line_height,
        colour: Colour::from_hex(&args.colour)?,
    };

    layout::layout_text(&document, &mut canvas, &style, &text);
    let path = document
        .export_png(&canvas, &args.out_dir)
        .context("could not export the rendered image")?;
    println!("{}", path.display());

    Ok(())
}

/// The text comes from the positional argument, a file, or piped stdin, in
/// that order; with none of those, the welcome text is rendered.
fn read_text(args: &Args) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref file) = args.file {
        return std::fs::read_to_string(file)
            .with_context(|| format!("could not read text file {}", file.display()));
    }
    if !std::io::stdin().is_terminal() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(WELCOME_TEXT.to_string())
}
