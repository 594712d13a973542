//! Text layout utilities for positioning lines of text on a canvas.
//!
//! The heart of this module is [wrap], which turns raw input text into an
//! ordered sequence of display lines that honour explicit newlines and
//! greedy word-wrap, splitting overlong words character-by-character. The
//! wrapper is a pure function over a caller-supplied measurement function,
//! so it can be driven by any font (see
//! [Font::width_of_text](crate::Font::width_of_text)) or by synthetic
//! measurements in tests.
//!
//! [layout_text] is the full layout pass: it wraps the text to the width of
//! a canvas's content box and places one span per line at a fixed vertical
//! offset derived from [line_offset].
//!
//! # Example
//!
//! ```
//! use handwrite_gen::layout::wrap;
//! use handwrite_gen::Px;
//!
//! // ten pixels per character, thirty pixels of room
//! let measure = |s: &str| Px(s.chars().count() as f32 * 10.0);
//! let lines = wrap("one two three", measure, Px(30.0));
//! assert_eq!(lines, vec!["one", "two", "thr", "ee"]);
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
