mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Utility functions and structures to wrap and place lines of text on a canvas
pub mod layout;

mod paper;
pub use paper::*;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

/// Re-export [image] functionality, mostly for constructing custom paper
/// textures and consuming rendered [image::RgbaImage] buffers
pub use image;
