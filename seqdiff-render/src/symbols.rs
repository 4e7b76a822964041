//! Symbols used for diff rendering.

/// Markers placed before elements that have no counterpart.
///
/// Useful when color is unavailable; with color they are usually omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSymbols {
    /// Marker for unmatched elements of the old sequence (default: "-")
    pub deleted: &'static str,

    /// Marker for unmatched elements of the new sequence (default: "+")
    pub inserted: &'static str,
}

impl Default for DiffSymbols {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DiffSymbols {
    /// Standard diff symbols, `-` and `+`.
    pub const STANDARD: Self = Self {
        deleted: "-",
        inserted: "+",
    };
}

/// Which of the two aligned sequences is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first sequence; unmatched elements were deleted.
    Old,
    /// The second sequence; unmatched elements were inserted.
    New,
}

impl Side {
    /// Marker for an unmatched element on this side.
    pub const fn symbol(self, symbols: &DiffSymbols) -> &'static str {
        match self {
            Self::Old => symbols.deleted,
            Self::New => symbols.inserted,
        }
    }
}
