//! Color backends for diff rendering.
//!
//! The render code only knows what an element means (deleted, inserted,
//! unchanged); the backend decides how that looks.

use core::fmt::Write;

use owo_colors::OwoColorize;

use crate::{DiffTheme, Side};

/// Semantic color meaning for rendered elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    /// Element of the old sequence with no counterpart
    Deleted,
    /// Element of the new sequence with no counterpart
    Inserted,
    /// Element that has a counterpart
    Unchanged,
    /// Brackets and separators
    Structure,
}

impl SemanticColor {
    /// Color for an unmatched element on `side`.
    pub const fn unmatched(side: Side) -> Self {
        match side {
            Side::Old => Self::Deleted,
            Side::New => Self::Inserted,
        }
    }
}

/// A backend that decides how to render semantic colors.
pub trait ColorBackend {
    /// Write styled text to the output.
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        color: SemanticColor,
    ) -> core::fmt::Result;

    /// Write a marker (`-`/`+`) in front of an unmatched element.
    fn write_prefix<W: Write>(
        &self,
        w: &mut W,
        prefix: &str,
        color: SemanticColor,
    ) -> core::fmt::Result {
        self.write_styled(w, prefix, color)
    }
}

/// Plain backend - no styling, just plain text.
///
/// Use this for tests and non-terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl ColorBackend for PlainBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        _color: SemanticColor,
    ) -> core::fmt::Result {
        w.write_str(text)
    }
}

/// ANSI backend - wraps deleted and inserted text in escape codes.
#[derive(Debug, Clone, Default)]
pub struct AnsiBackend {
    theme: DiffTheme,
}

impl AnsiBackend {
    /// Create a new ANSI backend with the given theme.
    pub fn new(theme: DiffTheme) -> Self {
        Self { theme }
    }
}

impl ColorBackend for AnsiBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        color: SemanticColor,
    ) -> core::fmt::Result {
        match color {
            SemanticColor::Deleted => write!(w, "{}", text.color(self.theme.deleted)),
            SemanticColor::Inserted => write!(w, "{}", text.color(self.theme.inserted)),
            SemanticColor::Unchanged | SemanticColor::Structure => w.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[seqdiff_testhelpers::test]
    fn plain_backend_ignores_color() {
        let mut out = String::new();
        PlainBackend
            .write_styled(&mut out, "hello", SemanticColor::Deleted)
            .unwrap();
        PlainBackend
            .write_prefix(&mut out, "+", SemanticColor::Inserted)
            .unwrap();
        assert_eq!(out, "hello+");
    }

    #[seqdiff_testhelpers::test]
    fn ansi_backend_colors_changes_only() {
        let backend = AnsiBackend::default();
        let mut out = String::new();

        backend
            .write_styled(&mut out, "gone", SemanticColor::Deleted)
            .unwrap();
        assert!(out.starts_with("\x1b[31m"));
        assert!(out.contains("gone"));

        out.clear();
        backend
            .write_styled(&mut out, "kept", SemanticColor::Unchanged)
            .unwrap();
        assert_eq!(out, "kept");
    }

    #[seqdiff_testhelpers::test]
    fn ansi_backend_truecolor_theme() {
        let backend = AnsiBackend::new(DiffTheme::TOKYO_NIGHT);
        let mut out = String::new();
        backend
            .write_styled(&mut out, "new", SemanticColor::Inserted)
            .unwrap();
        assert!(out.starts_with("\x1b[38;2;158;206;106m"));
    }

    #[seqdiff_testhelpers::test]
    fn unmatched_color_per_side() {
        assert_eq!(SemanticColor::unmatched(Side::Old), SemanticColor::Deleted);
        assert_eq!(SemanticColor::unmatched(Side::New), SemanticColor::Inserted);
    }
}
