//! Stroke encodings and sketch segmentation
//!
//! A sketch is an ordered `(n, 3)` array of stroke-3 points
//! `(dx, dy, pen_lift)`. This module converts losslessly between polylines,
//! stroke-3 and padded stroke-5, and splits sketches into their constituent
//! pen-strokes.

mod convert;
mod segment;


pub use convert::{
    clean_strokes, lines_to_strokes, strokes_to_lines, to_big_strokes, to_normal_strokes,
};
pub use segment::{max_len, max_stroke_len, split_sketch};
