//! Geometry of the implicit triangle a beap is packed into.
//!
//! Level `L` holds `L + 1` elements stored contiguously from `triangular(L)`.
//! The element at `(level, column)` has up to two parents on `level - 1`, at
//! columns `column - 1` and `column`, and up to two children on `level + 1`,
//! at columns `column` and `column + 1`.
//!
//! ```text
//! level 0:  0
//! level 1:  1  2
//! level 2:  3  4  5
//! level 3:  6  7  8  9
//! ```
//!
//! Levels and linear indices are 0-based everywhere.

use super::size::Size;

/// Inclusive range of linear indices occupied by one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span<SizeT> {
    pub first: SizeT,
    pub last: SizeT,
}

impl<SizeT> Span<SizeT>
where
    SizeT: Size,
{
    /// Number of slots, which is also the level number plus one.
    #[inline(always)]
    pub fn len(&self) -> SizeT {
        self.last - self.first + SizeT::ONE
    }

    #[inline(always)]
    pub fn contains(&self, index: SizeT) -> bool {
        self.first <= index && index <= self.last
    }
}

/// `level_of(i)` for every `i < T(10)`.
const SMALL_LEVELS: [u8; 55] = [
    0, //
    1, 1, //
    2, 2, 2, //
    3, 3, 3, 3, //
    4, 4, 4, 4, 4, //
    5, 5, 5, 5, 5, 5, //
    6, 6, 6, 6, 6, 6, 6, //
    7, 7, 7, 7, 7, 7, 7, 7, //
    8, 8, 8, 8, 8, 8, 8, 8, 8, //
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
];

/// `n * (n + 1) / 2`. Overflows past `level_of(SizeT::MAX)`.
#[inline(always)]
pub fn triangular<SizeT>(n: SizeT) -> SizeT
where
    SizeT: Size,
{
    let two = SizeT::from_u8(2);
    if n % two == SizeT::ZERO {
        (n / two) * (n + SizeT::ONE)
    } else {
        n * ((n + SizeT::ONE) / two)
    }
}

#[inline(always)]
pub fn checked_triangular<SizeT>(n: SizeT) -> Option<SizeT>
where
    SizeT: Size,
{
    let two = SizeT::from_u8(2);
    let next = n.checked_add(&SizeT::ONE)?;
    if n % two == SizeT::ZERO {
        (n / two).checked_mul(&next)
    } else {
        n.checked_mul(&(next / two))
    }
}

/// Largest `level` with `triangular(level) <= index`.
pub fn level_of<SizeT>(index: SizeT) -> SizeT
where
    SizeT: Size,
{
    if index < SizeT::from_u8(SMALL_LEVELS.len() as u8) {
        return SizeT::from_u8(SMALL_LEVELS[index.as_usize()]);
    }
    // Inverse triangular number; the float estimate may be off by one either
    // way once the index no longer fits an f64 mantissa.
    let estimate = (((8.0 * index.as_f64() + 1.0).sqrt() - 1.0) / 2.0).floor();
    let mut level = SizeT::from_f64_lossy(estimate);
    while checked_triangular(level).map_or(true, |first| first > index) {
        level = level - SizeT::ONE;
    }
    while checked_triangular(level + SizeT::ONE).map_or(false, |first| first <= index) {
        level = level + SizeT::ONE;
    }
    level
}

/// Number of elements in the complete levels whose spans are all
/// representable in `SizeT`. A beap never grows past this.
pub fn max_len<SizeT>() -> SizeT
where
    SizeT: Size,
{
    triangular(level_of(SizeT::MAX))
}

#[inline(always)]
pub fn level_span<SizeT>(level: SizeT) -> Span<SizeT>
where
    SizeT: Size,
{
    let first = triangular(level);
    Span { first, last: first + level }
}

/// Span of the level after the one covering `span`, or `None` if its last
/// index does not fit in `SizeT`.
#[inline(always)]
pub fn next_level_span<SizeT>(span: Span<SizeT>) -> Option<Span<SizeT>>
where
    SizeT: Size,
{
    let first = span.last.checked_add(&SizeT::ONE)?;
    let last = first.checked_add(&span.len())?;
    Some(Span { first, last })
}

/// Span of the level before the one covering `span`; `None` for the root.
#[inline(always)]
pub fn prev_level_span<SizeT>(span: Span<SizeT>) -> Option<Span<SizeT>>
where
    SizeT: Size,
{
    if span.first == SizeT::ZERO {
        return None;
    }
    Some(Span { first: span.first - (span.last - span.first), last: span.first - SizeT::ONE })
}

/// `(level, column)` of a linear index.
#[inline(always)]
pub fn position_of<SizeT>(index: SizeT) -> (SizeT, SizeT)
where
    SizeT: Size,
{
    let level = level_of(index);
    (level, index - triangular(level))
}

#[inline(always)]
pub fn index_of<SizeT>(level: SizeT, column: SizeT) -> SizeT
where
    SizeT: Size,
{
    debug_assert!(column <= level);
    triangular(level) + column
}

/// Parent at `(level - 1, column - 1)`.
#[inline(always)]
pub fn up_parent<SizeT>(level: SizeT, column: SizeT) -> Option<SizeT>
where
    SizeT: Size,
{
    debug_assert!(column <= level);
    if column == SizeT::ZERO {
        return None;
    }
    Some(triangular(level - SizeT::ONE) + column - SizeT::ONE)
}

/// Parent at `(level - 1, column)`.
#[inline(always)]
pub fn left_parent<SizeT>(level: SizeT, column: SizeT) -> Option<SizeT>
where
    SizeT: Size,
{
    debug_assert!(column <= level);
    if column == level {
        return None;
    }
    Some(triangular(level - SizeT::ONE) + column)
}

/// Children at `(level + 1, column)` and `(level + 1, column + 1)` among the
/// first `len` stored elements.
#[inline(always)]
pub fn children<SizeT>(level: SizeT, column: SizeT, len: SizeT) -> (Option<SizeT>, Option<SizeT>)
where
    SizeT: Size,
{
    debug_assert!(column <= level);
    let left = checked_triangular(level + SizeT::ONE).and_then(|first| first.checked_add(&column));
    let right = left.and_then(|left| left.checked_add(&SizeT::ONE));
    (left.filter(|&index| index < len), right.filter(|&index| index < len))
}
