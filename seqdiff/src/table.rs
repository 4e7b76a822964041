//! The dynamic-programming table behind the alignment.

use crate::{DiffError, DiffOptions};
use crate::tracing_macros::debug;

/// Prefix alignment lengths, `(a.len() + 1) × (b.len() + 1)`, row-major.
///
/// `get(i, j)` is the length of the longest alignment between `a[..i]` and
/// `b[..j]`. Cells are `u32`: a table that passes the overflow check has
/// `min(n, m) + 1` squared cells at most `usize::MAX`, so every length fits.
pub(crate) struct LcsTable {
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// Fill the table, calling `eq` exactly once per `(a[i], b[j])` pair.
    pub(crate) fn build<A, B, F>(
        a: &[A],
        b: &[B],
        eq: &F,
        options: &DiffOptions,
    ) -> Result<Self, DiffError>
    where
        F: Fn(&A, &B) -> bool,
    {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let len = Self::checked_cells(rows, cols, options)?;
        debug!(rows, cols, cells = len, "allocating alignment table");

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| DiffError::AllocationFailed { cells: len })?;
        cells.resize(len, 0);

        for (i, x) in a.iter().enumerate() {
            let (above, rest) = cells.split_at_mut((i + 1) * cols);
            let prev = &above[i * cols..];
            let row = &mut rest[..cols];
            for (j, y) in b.iter().enumerate() {
                row[j + 1] = if eq(x, y) {
                    prev[j] + 1
                } else {
                    prev[j + 1].max(row[j])
                };
            }
        }

        Ok(Self { cols, cells })
    }

    /// Size check done before any allocation or predicate call.
    pub(crate) fn checked_cells(
        rows: usize,
        cols: usize,
        options: &DiffOptions,
    ) -> Result<usize, DiffError> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(DiffError::CapacityOverflow { rows, cols })?;
        if let Some(limit) = options.max_cells_limit() {
            if cells > limit {
                return Err(DiffError::TableTooLarge { cells, limit });
            }
        }
        Ok(cells)
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }
}
