use std::cmp::Ordering;

/// Strict total order a beap is kept in. The greatest element under
/// `compare` sits at the root.
pub trait Comparator<ValueT> {
    fn compare(lhs: &ValueT, rhs: &ValueT) -> Ordering;
}

/// `Ord` order; the beap root holds the maximum.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<ValueT> Comparator<ValueT> for Natural
where
    ValueT: Ord,
{
    #[inline(always)]
    fn compare(lhs: &ValueT, rhs: &ValueT) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Inverted `Ord` order; the beap root holds the minimum.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse;

impl<ValueT> Comparator<ValueT> for Reverse
where
    ValueT: Ord,
{
    #[inline(always)]
    fn compare(lhs: &ValueT, rhs: &ValueT) -> Ordering {
        rhs.cmp(lhs)
    }
}
