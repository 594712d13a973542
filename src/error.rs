use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode a paper texture or encode the output
    Image(#[from] image::ImageError),

    /// [fontdue] rejected the font data, so glyphs cannot be rasterized
    #[error("failed to prepare font for rasterization: {0}")]
    MalformedFont(&'static str),

    /// A colour string could not be parsed
    #[error("invalid colour {0:?}: expected #rrggbb")]
    InvalidColour(String),

    /// The canvas has no pixels to render or export
    #[error("canvas has zero area; set a positive width and height before exporting")]
    EmptyCanvas,
}
