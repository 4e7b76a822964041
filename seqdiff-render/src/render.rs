//! Rendering aligned sequences.

use core::fmt::{Display, Write};

use crate::backend::{AnsiBackend, ColorBackend, PlainBackend, SemanticColor};
use crate::{DiffSymbols, Side};

/// Options for rendering an alignment.
#[derive(Clone, Debug)]
pub struct RenderOptions<B: ColorBackend> {
    /// Color backend for styling output.
    pub backend: B,
    /// Markers written before unmatched elements, if any.
    pub symbols: Option<DiffSymbols>,
    /// Separator between elements (default: `", "`).
    pub separator: &'static str,
}

impl Default for RenderOptions<AnsiBackend> {
    fn default() -> Self {
        Self::with_backend(AnsiBackend::default())
    }
}

impl RenderOptions<PlainBackend> {
    /// Plain text with `-`/`+` markers, readable without color.
    pub fn plain() -> Self {
        Self::with_backend(PlainBackend).with_symbols(DiffSymbols::STANDARD)
    }
}

impl<B: ColorBackend> RenderOptions<B> {
    /// Create options with a custom backend and no markers.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            symbols: None,
            separator: ", ",
        }
    }

    /// Write `symbols` before unmatched elements.
    pub fn with_symbols(mut self, symbols: DiffSymbols) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Use `separator` between elements.
    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }
}

/// Render one side of an alignment as `[x, y, ...]`.
///
/// `counterpart` is the correspondence array for `items` (`a2b` for the old
/// sequence, `b2a` for the new one). Elements whose entry is `None` are
/// styled as deleted or inserted depending on `side`. Both slices are
/// walked together and rendering stops at the shorter one.
pub fn render_side<T, W, B>(
    items: &[T],
    counterpart: &[Option<usize>],
    side: Side,
    w: &mut W,
    opts: &RenderOptions<B>,
) -> core::fmt::Result
where
    T: Display,
    W: Write,
    B: ColorBackend,
{
    let backend = &opts.backend;
    backend.write_styled(w, "[", SemanticColor::Structure)?;
    for (idx, (item, other)) in items.iter().zip(counterpart).enumerate() {
        if idx > 0 {
            backend.write_styled(w, opts.separator, SemanticColor::Structure)?;
        }
        let text = item.to_string();
        if other.is_some() {
            backend.write_styled(w, &text, SemanticColor::Unchanged)?;
        } else {
            let color = SemanticColor::unmatched(side);
            if let Some(symbols) = &opts.symbols {
                backend.write_prefix(w, side.symbol(symbols), color)?;
            }
            backend.write_styled(w, &text, color)?;
        }
    }
    backend.write_styled(w, "]", SemanticColor::Structure)
}

/// Render one side of an alignment to a `String`.
pub fn render_side_to_string<T: Display, B: ColorBackend>(
    items: &[T],
    counterpart: &[Option<usize>],
    side: Side,
    opts: &RenderOptions<B>,
) -> String {
    let mut out = String::new();
    render_side(items, counterpart, side, &mut out, opts).expect("writing to String cannot fail");
    out
}

/// Render both sides of an existing alignment: old line, newline, new line.
pub fn render_diff<A, B, Bk>(
    a: &[A],
    b: &[B],
    a2b: &[Option<usize>],
    b2a: &[Option<usize>],
    opts: &RenderOptions<Bk>,
) -> String
where
    A: Display,
    B: Display,
    Bk: ColorBackend,
{
    let mut out = render_side_to_string(a, a2b, Side::Old, opts);
    out.push('\n');
    out.push_str(&render_side_to_string(b, b2a, Side::New, opts));
    out
}

/// Align `a` with `b` using `PartialEq` and render the result.
///
/// ```
/// use seqdiff_render::{RenderOptions, format_diff};
///
/// let out = format_diff(&[1, 2, 3], &[1, 3, 4], &RenderOptions::plain());
/// assert_eq!(out, "[1, -2, 3]\n[1, 3, +4]");
/// ```
///
/// # Panics
///
/// Panics if the alignment table cannot be allocated, like [`seqdiff::diff`].
pub fn format_diff<A, B, Bk>(a: &[A], b: &[B], opts: &RenderOptions<Bk>) -> String
where
    A: Display + PartialEq<B>,
    B: Display,
    Bk: ColorBackend,
{
    format_diff_by(a, b, <A as PartialEq<B>>::eq, opts)
}

/// Align `a` with `b` using `eq` and render the result.
pub fn format_diff_by<A, B, F, Bk>(a: &[A], b: &[B], eq: F, opts: &RenderOptions<Bk>) -> String
where
    A: Display,
    B: Display,
    F: Fn(&A, &B) -> bool,
    Bk: ColorBackend,
{
    let (a2b, b2a) = seqdiff::diff_by(a, b, eq);
    render_diff(a, b, &a2b, &b2a, opts)
}

/// Print the colored alignment of `a` and `b` to stdout.
pub fn print_diff<A, B>(a: &[A], b: &[B])
where
    A: Display + PartialEq<B>,
    B: Display,
{
    println!("{}", format_diff(a, b, &RenderOptions::<AnsiBackend>::default()));
}

/// Print the colored alignment of `a` and `b` under `eq` to stdout.
pub fn print_diff_by<A, B, F>(a: &[A], b: &[B], eq: F)
where
    A: Display,
    B: Display,
    F: Fn(&A, &B) -> bool,
{
    println!("{}", format_diff_by(a, b, eq, &RenderOptions::<AnsiBackend>::default()));
}
