#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
//! Order-preserving correspondence between two sequences.
//!
//! [`diff`] aligns two slices and returns a pair of correspondence arrays,
//! `(a2b, b2a)`. `a2b[i]` is `Some(j)` when `a[i]` was matched with `b[j]`
//! and `None` when `a[i]` has no counterpart; `b2a` is the mirror image.
//!
//! ```
//! let a = ["a", "b", "c", "d"];
//! let b = ["a", "c", "e"];
//! let (a2b, b2a) = seqdiff::diff(&a, &b);
//! assert_eq!(a2b, vec![Some(0), None, Some(1), None]);
//! assert_eq!(b2a, vec![Some(0), Some(2), None]);
//! ```
//!
//! Matched pairs always satisfy the equality predicate and increase in both
//! coordinates. The predicate can be replaced with [`diff_by`]; it does not
//! need to be reflexive or transitive, so `NaN` simply never matches under
//! `PartialEq`.
//!
//! The alignment is a longest common subsequence computed over an
//! `(a.len() + 1) × (b.len() + 1)` table, so time and memory are `O(n·m)`.
//! [`try_diff`] and [`try_diff_by`] take [`DiffOptions`] to cap the table
//! size and return a [`DiffError`] instead of panicking when it cannot be
//! built.

mod error;
mod options;
mod ratio;
mod sequences;
mod table;
mod tracing_macros;

pub use error::DiffError;
pub use options::DiffOptions;
pub use ratio::{ratio, ratio_by};
pub use sequences::{Diff, diff, diff_by, matched_pairs, try_diff, try_diff_by};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
