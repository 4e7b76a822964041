#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Rendering for [`seqdiff`] alignments.
//!
//! Each sequence is printed as a list, and elements without a counterpart
//! in the other sequence are highlighted:
//!
//! ```text
//! [1, 2, 3]      2 is red (deleted)
//! [1, 3, 4]      4 is green (inserted)
//! ```
//!
//! Rendering only reads the two sequences and their correspondence arrays,
//! so [`render_diff`] works with any alignment, including ones computed
//! with [`seqdiff::try_diff_by`] and custom options.

mod backend;
mod render;
mod symbols;
mod theme;

pub use backend::{AnsiBackend, ColorBackend, PlainBackend, SemanticColor};
pub use render::{
    RenderOptions, format_diff, format_diff_by, print_diff, print_diff_by, render_diff,
    render_side, render_side_to_string,
};
pub use symbols::{DiffSymbols, Side};
pub use theme::DiffTheme;
