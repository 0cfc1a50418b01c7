use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use super::error::BeapError;
use super::size::Size;
use super::storage::Storage;

/// Store that allocates room for `CAPACITY` elements up front and never grows
/// past it.
#[derive(Clone, Debug)]
pub struct FixedArray<SizeT, ValueT, const CAPACITY: usize>
where
    SizeT: Size,
{
    vec: Vec<ValueT>,
    phantom: PhantomData<SizeT>,
}

impl<SizeT, ValueT, const CAPACITY: usize> FixedArray<SizeT, ValueT, CAPACITY>
where
    SizeT: Size,
{
    /// `CAPACITY`, clamped to what `SizeT` can count.
    fn limit() -> usize {
        CAPACITY.min(SizeT::MAX.as_usize())
    }
}

impl<SizeT, ValueT, const CAPACITY: usize> Default for FixedArray<SizeT, ValueT, CAPACITY>
where
    SizeT: Size,
{
    fn default() -> Self {
        FixedArray { vec: Vec::with_capacity(Self::limit()), phantom: PhantomData }
    }
}

impl<SizeT, ValueT, const CAPACITY: usize> Storage<SizeT, ValueT> for FixedArray<SizeT, ValueT, CAPACITY>
where
    SizeT: Size,
{
    fn from_vec(mut vec: Vec<ValueT>) -> Result<Self, BeapError> {
        if vec.len() > Self::limit() {
            return Err(BeapError::CapacityExceeded { capacity: Self::limit() });
        }
        vec.reserve_exact(Self::limit() - vec.len());
        Ok(FixedArray { vec, phantom: PhantomData })
    }

    #[inline(always)]
    fn len(&self) -> SizeT {
        SizeT::from_usize(self.vec.len()).unwrap_or(SizeT::MAX)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    fn capacity_limit(&self) -> Option<usize> {
        Some(Self::limit())
    }

    fn push(&mut self, value: ValueT) -> Result<(), BeapError> {
        if self.vec.len() >= Self::limit() {
            return Err(BeapError::CapacityExceeded { capacity: Self::limit() });
        }
        self.vec.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Option<ValueT> {
        self.vec.pop()
    }

    #[inline(always)]
    fn swap(&mut self, a: SizeT, b: SizeT) {
        self.vec.swap(a.as_usize(), b.as_usize());
    }

    // Room for `CAPACITY` is reserved at construction.
    fn reserve(&mut self, _additional: SizeT) {}

    fn clear(&mut self) {
        self.vec.clear();
    }

    fn as_slice(&self) -> &[ValueT] {
        &self.vec
    }

    fn into_vec(self) -> Vec<ValueT> {
        self.vec
    }
}

impl<SizeT, ValueT, const CAPACITY: usize> Index<SizeT> for FixedArray<SizeT, ValueT, CAPACITY>
where
    SizeT: Size,
{
    type Output = ValueT;
    fn index(&self, index: SizeT) -> &Self::Output {
        &self.vec[index.as_usize()]
    }
}

impl<SizeT, ValueT, const CAPACITY: usize> IndexMut<SizeT> for FixedArray<SizeT, ValueT, CAPACITY>
where
    SizeT: Size,
{
    fn index_mut(&mut self, index: SizeT) -> &mut Self::Output {
        &mut self.vec[index.as_usize()]
    }
}
