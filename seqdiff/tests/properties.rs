//! Property tests for the alignment invariants.
//!
//! Small alphabets keep the inputs dense with duplicates, which is where
//! the backtracking has the most choices to get wrong.

use proptest::prelude::*;
use seqdiff::{Diff, diff, diff_by};

/// Assert shape, mutual consistency, predicate agreement and ordering.
fn check_alignment<A, B>(a: &[A], b: &[B], a2b: &Diff, b2a: &Diff, eq: impl Fn(&A, &B) -> bool) {
    assert_eq!(a2b.len(), a.len());
    assert_eq!(b2a.len(), b.len());

    for (i, j) in a2b.iter().enumerate() {
        if let Some(j) = *j {
            assert_eq!(b2a[j], Some(i), "b2a[{j}] should point back to {i}");
            assert!(eq(&a[i], &b[j]), "matched pair ({i}, {j}) fails the predicate");
        }
    }
    for (j, i) in b2a.iter().enumerate() {
        if let Some(i) = *i {
            assert_eq!(a2b[i], Some(j), "a2b[{i}] should point back to {j}");
        }
    }

    let pairs: Vec<_> = seqdiff::matched_pairs(a2b).collect();
    for w in pairs.windows(2) {
        assert!(
            w[0].0 < w[1].0 && w[0].1 < w[1].1,
            "pairs {:?} and {:?} cross",
            w[0],
            w[1]
        );
    }
}

/// Textbook LCS length, two rolling rows.
fn reference_lcs_len<A, B>(a: &[A], b: &[B], eq: impl Fn(&A, &B) -> bool) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for x in a {
        for (j, y) in b.iter().enumerate() {
            cur[j + 1] = if eq(x, y) {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        core::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

fn small_ints() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..24)
}

fn floats_with_nan() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![Just(f64::NAN), (0u8..3).prop_map(f64::from)],
        0..16,
    )
}

fn nan_aware(x: &f64, y: &f64) -> bool {
    x == y || (x.is_nan() && y.is_nan())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn alignment_is_valid(a in small_ints(), b in small_ints()) {
        seqdiff_testhelpers::setup();
        let (a2b, b2a) = diff(&a, &b);
        check_alignment(&a, &b, &a2b, &b2a, |x, y| x == y);
    }

    #[test]
    fn alignment_is_longest(a in small_ints(), b in small_ints()) {
        seqdiff_testhelpers::setup();
        let (a2b, _) = diff(&a, &b);
        let matched = a2b.iter().flatten().count();
        prop_assert_eq!(matched, reference_lcs_len(&a, &b, |x, y| x == y));
    }

    #[test]
    fn self_diff_is_identity(a in prop::collection::vec("[a-c]{0,2}", 0..16)) {
        seqdiff_testhelpers::setup();
        let (a2b, b2a) = diff(&a, &a);
        prop_assert_eq!(&a2b, &b2a);
        for (i, j) in a2b.iter().enumerate() {
            prop_assert_eq!(*j, Some(i));
        }
    }

    #[test]
    fn shared_element_yields_a_match(a in small_ints(), b in small_ints()) {
        seqdiff_testhelpers::setup();
        let (a2b, b2a) = diff(&a, &b);
        if a.iter().any(|x| b.contains(x)) {
            prop_assert!(a2b.iter().any(Option::is_some));
            prop_assert!(b2a.iter().any(Option::is_some));
        } else {
            prop_assert!(a2b.iter().all(Option::is_none));
            prop_assert!(b2a.iter().all(Option::is_none));
        }
    }

    #[test]
    fn repeated_calls_agree(a in small_ints(), b in small_ints()) {
        seqdiff_testhelpers::setup();
        prop_assert_eq!(diff(&a, &b), diff(&a, &b));
    }

    #[test]
    fn nan_is_never_matched_by_partial_eq(a in floats_with_nan(), b in floats_with_nan()) {
        seqdiff_testhelpers::setup();
        let (a2b, b2a) = diff(&a, &b);
        check_alignment(&a, &b, &a2b, &b2a, |x, y| x == y);
        for (i, _) in seqdiff::matched_pairs(&a2b) {
            prop_assert!(!a[i].is_nan());
        }
    }

    #[test]
    fn nan_aware_predicate_matches_nan(a in floats_with_nan(), b in floats_with_nan()) {
        seqdiff_testhelpers::setup();
        let (a2b, b2a) = diff_by(&a, &b, nan_aware);
        check_alignment(&a, &b, &a2b, &b2a, nan_aware);
        prop_assert_eq!(
            a2b.iter().flatten().count(),
            reference_lcs_len(&a, &b, nan_aware)
        );

        let (self_a2b, _) = diff_by(&a, &a, nan_aware);
        prop_assert!(self_a2b.iter().enumerate().all(|(i, j)| *j == Some(i)));
    }

    #[test]
    fn mixed_element_types(a in small_ints(), b in prop::collection::vec(0u32..4, 0..24)) {
        seqdiff_testhelpers::setup();
        let eq = |x: &u8, y: &u32| u32::from(*x) == *y;
        let (a2b, b2a) = diff_by(&a, &b, eq);
        check_alignment(&a, &b, &a2b, &b2a, eq);
    }
}
