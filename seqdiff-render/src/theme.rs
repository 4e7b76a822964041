//! Color themes for diff rendering.

use owo_colors::{AnsiColors, DynColors};

/// Color theme for diff rendering.
///
/// Only elements without a counterpart are colored; matched elements and
/// list punctuation keep the terminal's default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffTheme {
    /// Color for elements of the old sequence with no match (default: red)
    pub deleted: DynColors,

    /// Color for elements of the new sequence with no match (default: green)
    pub inserted: DynColors,
}

impl Default for DiffTheme {
    fn default() -> Self {
        Self::TERMINAL
    }
}

impl DiffTheme {
    /// The terminal's own red and green (default).
    pub const TERMINAL: Self = Self {
        deleted: DynColors::Ansi(AnsiColors::Red),
        inserted: DynColors::Ansi(AnsiColors::Green),
    };

    /// Tokyo Night truecolor theme.
    pub const TOKYO_NIGHT: Self = Self {
        deleted: DynColors::Rgb(247, 118, 142),
        inserted: DynColors::Rgb(158, 206, 106),
    };
}
