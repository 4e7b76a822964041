//! Similarity score derived from an alignment.

use crate::diff_by;

/// Percentage of elements that found a counterpart, in `[0, 100]`.
///
/// Computed as `100 * 2M / (a.len() + b.len())` where `M` is the number of
/// matched pairs. Two empty sequences are identical and score `100`.
///
/// ```
/// assert_eq!(seqdiff::ratio(&[1, 2, 3, 4], &[1, 2, 3, 4]), 100.0);
/// assert_eq!(seqdiff::ratio(&[1, 2], &[3, 4]), 0.0);
/// assert_eq!(seqdiff::ratio(&[1, 2, 3], &[1]), 50.0);
/// ```
///
/// # Panics
///
/// Panics under the same conditions as [`diff`](crate::diff).
pub fn ratio<A: PartialEq<B>, B>(a: &[A], b: &[B]) -> f64 {
    ratio_by(a, b, <A as PartialEq<B>>::eq)
}

/// Like [`ratio`], matching elements with `eq`.
pub fn ratio_by<A, B, F>(a: &[A], b: &[B], eq: F) -> f64
where
    F: Fn(&A, &B) -> bool,
{
    let total = a.len() + b.len();
    if total == 0 {
        return 100.;
    }
    let (a2b, _) = diff_by(a, b, eq);
    let matched = a2b.iter().filter(|j| j.is_some()).count();
    (100 * 2 * matched) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[seqdiff_testhelpers::test]
    fn empty_inputs_are_identical() {
        assert_eq!(ratio::<u8, u8>(&[], &[]), 100.);
    }

    #[seqdiff_testhelpers::test]
    fn one_empty_side_scores_zero() {
        assert_eq!(ratio(&[] as &[u8], &[1, 2]), 0.);
    }

    #[seqdiff_testhelpers::test]
    fn partial_overlap() {
        let s: Vec<char> = "1 1 1 1 1 1 1 1 1 1".chars().collect();
        let t: Vec<char> = "1 2 1 1 2 1 1 4 1 1".chars().collect();
        // 19 characters each; only the three non-`1` digits differ.
        assert_eq!(ratio(&s, &t), 100. * 32. / 38.);
    }

    #[seqdiff_testhelpers::test]
    fn predicate_is_used() {
        let a = ["Apple", "Banana"];
        let b = ["apple", "banana"];
        assert_eq!(ratio(&a, &b), 0.);
        assert_eq!(
            ratio_by(&a, &b, |x: &&str, y: &&str| x.eq_ignore_ascii_case(y)),
            100.
        );
    }
}
