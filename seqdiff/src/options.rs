/// Options for computing a diff.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use seqdiff::DiffOptions;
///
/// let options = DiffOptions::new().max_cells(1 << 20);
/// assert_eq!(options.max_cells_limit(), Some(1 << 20));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Upper bound on the number of cells in the alignment table.
    /// `None` means only the allocator limits the table.
    max_cells: Option<usize>,
}

impl DiffOptions {
    /// Create a new `DiffOptions` with default settings (no cell limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to align inputs whose table would exceed `limit` cells.
    ///
    /// The table has `(a.len() + 1) * (b.len() + 1)` cells. Inputs over the
    /// limit fail with [`DiffError::TableTooLarge`](crate::DiffError::TableTooLarge)
    /// before the equality predicate is ever called.
    pub fn max_cells(mut self, limit: usize) -> Self {
        self.max_cells = Some(limit);
        self
    }

    /// The configured cell limit, if any.
    pub fn max_cells_limit(&self) -> Option<usize> {
        self.max_cells
    }
}
