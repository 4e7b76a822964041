//! Sequence alignment: longest common subsequence over a caller predicate.

use crate::table::LcsTable;
use crate::tracing_macros::trace;
use crate::{DiffError, DiffOptions};

/// Per-position correspondence into the other sequence.
///
/// `None` marks a position with no counterpart.
pub type Diff = Vec<Option<usize>>;

/// Aligns `a` with `b` using `PartialEq`.
///
/// Returns `(a2b, b2a)`: `a2b[i]` is the index in `b` matched with `a[i]`,
/// `b2a[j]` the index in `a` matched with `b[j]`.
///
/// ```
/// let (a2b, b2a) = seqdiff::diff(&[1, 2, 3], &[1, 3]);
/// assert_eq!(a2b, vec![Some(0), None, Some(1)]);
/// assert_eq!(b2a, vec![Some(0), Some(2)]);
/// ```
///
/// # Panics
///
/// Panics if the alignment table cannot be allocated. Use [`try_diff`] to
/// handle that case.
pub fn diff<A: PartialEq<B>, B>(a: &[A], b: &[B]) -> (Diff, Diff) {
    diff_by(a, b, <A as PartialEq<B>>::eq)
}

/// Aligns `a` with `b`, matching elements for which `eq` returns `true`.
///
/// `eq` needs to be neither reflexive nor transitive: a pair is matched only
/// if `eq` accepts that specific pair.
///
/// ```
/// let a = [f64::NAN, 1.0];
/// let b = [f64::NAN, 1.0];
/// let (a2b, _) = seqdiff::diff_by(&a, &b, |x: &f64, y: &f64| {
///     x == y || (x.is_nan() && y.is_nan())
/// });
/// assert_eq!(a2b, vec![Some(0), Some(1)]);
/// ```
///
/// # Panics
///
/// Panics if the alignment table cannot be allocated. Use [`try_diff_by`] to
/// handle that case.
pub fn diff_by<A, B, F>(a: &[A], b: &[B], eq: F) -> (Diff, Diff)
where
    F: Fn(&A, &B) -> bool,
{
    try_diff_by(a, b, eq, &DiffOptions::default()).unwrap_or_else(|err| panic!("{err}"))
}

/// Like [`diff`], but reports table capacity problems instead of panicking.
pub fn try_diff<A: PartialEq<B>, B>(
    a: &[A],
    b: &[B],
    options: &DiffOptions,
) -> Result<(Diff, Diff), DiffError> {
    try_diff_by(a, b, <A as PartialEq<B>>::eq, options)
}

/// Like [`diff_by`], but reports table capacity problems instead of panicking.
///
/// ```
/// use seqdiff::{DiffError, DiffOptions};
///
/// let options = DiffOptions::new().max_cells(4);
/// let err = seqdiff::try_diff(&[1, 2], &[1, 2], &options).unwrap_err();
/// assert_eq!(err, DiffError::TableTooLarge { cells: 9, limit: 4 });
/// ```
pub fn try_diff_by<A, B, F>(
    a: &[A],
    b: &[B],
    eq: F,
    options: &DiffOptions,
) -> Result<(Diff, Diff), DiffError>
where
    F: Fn(&A, &B) -> bool,
{
    if a.is_empty() || b.is_empty() {
        return Ok((unmatched(a.len())?, unmatched(b.len())?));
    }

    LcsTable::checked_cells(a.len() + 1, b.len() + 1, options)?;
    let mut a2b = unmatched(a.len())?;
    let mut b2a = unmatched(b.len())?;
    let table = LcsTable::build(a, b, &eq, options)?;

    // Walk back from the full prefixes. A diagonal step is only taken when
    // the predicate accepts the pair, so every recorded match satisfies it.
    let mut i = a.len();
    let mut j = b.len();
    while i > 0 && j > 0 {
        let here = table.get(i, j);
        if here == table.get(i - 1, j - 1) + 1 && eq(&a[i - 1], &b[j - 1]) {
            a2b[i - 1] = Some(j - 1);
            b2a[j - 1] = Some(i - 1);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            // Ties consume `a` first.
            i -= 1;
        } else {
            j -= 1;
        }
    }

    trace!(matched = a2b.iter().flatten().count(), "alignment done");
    Ok((a2b, b2a))
}

/// A correspondence array with no matches, allocated fallibly.
fn unmatched(len: usize) -> Result<Diff, DiffError> {
    let mut diff = Vec::new();
    diff.try_reserve_exact(len)
        .map_err(|_| DiffError::AllocationFailed { cells: len })?;
    diff.resize(len, None);
    Ok(diff)
}

/// Iterates over the matched `(i, j)` pairs of a correspondence array, in
/// increasing order of both indices.
///
/// ```
/// let (a2b, _) = seqdiff::diff(&['a', 'b', 'c'], &['b', 'c']);
/// let pairs: Vec<_> = seqdiff::matched_pairs(&a2b).collect();
/// assert_eq!(pairs, vec![(1, 0), (2, 1)]);
/// ```
pub fn matched_pairs(a2b: &[Option<usize>]) -> impl Iterator<Item = (usize, usize)> + '_ {
    a2b.iter()
        .enumerate()
        .filter_map(|(i, j)| j.map(|j| (i, j)))
}
