//! Errors raised while building the alignment table.

/// Error returned when the `(n + 1) × (m + 1)` alignment table cannot be built.
///
/// Aligning is a total function over its inputs; the table is the only
/// resource it acquires, so running out of room for it is the only way a
/// diff can fail. The alignment is never truncated to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiffError {
    /// The number of table cells does not fit in a `usize`.
    CapacityOverflow {
        /// Rows of the table (`a.len() + 1`).
        rows: usize,
        /// Columns of the table (`b.len() + 1`).
        cols: usize,
    },

    /// The table is larger than the limit set with
    /// [`DiffOptions::max_cells`](crate::DiffOptions::max_cells).
    TableTooLarge {
        /// Cells the table would need.
        cells: usize,
        /// The configured limit.
        limit: usize,
    },

    /// The allocator could not provide memory for the table.
    AllocationFailed {
        /// Cells the table would need.
        cells: usize,
    },
}

impl core::fmt::Display for DiffError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DiffError::CapacityOverflow { rows, cols } => {
                write!(f, "alignment table of {rows}x{cols} cells overflows usize")
            }
            DiffError::TableTooLarge { cells, limit } => {
                write!(
                    f,
                    "alignment table needs {cells} cells, more than the limit of {limit}"
                )
            }
            DiffError::AllocationFailed { cells } => {
                write!(f, "failed to allocate an alignment table of {cells} cells")
            }
        }
    }
}

impl core::error::Error for DiffError {}
