use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use super::error::BeapError;
use super::size::Size;
use super::storage::Storage;

/// Growable store indexed by `SizeT`. Holds at most `SizeT::MAX` elements so
/// that its length stays representable.
#[derive(Clone, Debug)]
pub struct Array<SizeT, ValueT>
where
    SizeT: Size,
{
    vec: Vec<ValueT>,
    phantom: PhantomData<SizeT>,
}

impl<SizeT, ValueT> Default for Array<SizeT, ValueT>
where
    SizeT: Size,
{
    fn default() -> Self {
        Array { vec: Vec::default(), phantom: PhantomData }
    }
}

impl<SizeT, ValueT> Array<SizeT, ValueT>
where
    SizeT: Size,
{
    pub fn iter(&self) -> Iter<ValueT> {
        self.vec.iter()
    }

    pub fn first(&self) -> Option<&ValueT> {
        self.vec.first()
    }

    pub fn last(&self) -> Option<&ValueT> {
        self.vec.last()
    }
}

impl<SizeT, ValueT> Storage<SizeT, ValueT> for Array<SizeT, ValueT>
where
    SizeT: Size,
{
    fn from_vec(vec: Vec<ValueT>) -> Result<Self, BeapError> {
        if vec.len() > SizeT::MAX.as_usize() {
            return Err(BeapError::CapacityExceeded { capacity: SizeT::MAX.as_usize() });
        }
        Ok(Array { vec, phantom: PhantomData })
    }

    #[inline(always)]
    fn len(&self) -> SizeT {
        debug_assert!(self.vec.len() <= SizeT::MAX.as_usize());
        SizeT::from_usize(self.vec.len()).unwrap_or(SizeT::MAX)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    fn capacity_limit(&self) -> Option<usize> {
        None
    }

    fn push(&mut self, value: ValueT) -> Result<(), BeapError> {
        if self.vec.len() >= SizeT::MAX.as_usize() {
            return Err(BeapError::CapacityExceeded { capacity: SizeT::MAX.as_usize() });
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

    fn reserve(&mut self, additional: SizeT) {
        self.vec.reserve(additional.as_usize());
    }

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

impl<SizeT, ValueT> Index<SizeT> for Array<SizeT, ValueT>
where
    SizeT: Size,
{
    type Output = ValueT;
    fn index(&self, index: SizeT) -> &Self::Output {
        &self.vec[index.as_usize()]
    }
}

impl<SizeT, ValueT> IndexMut<SizeT> for Array<SizeT, ValueT>
where
    SizeT: Size,
{
    fn index_mut(&mut self, index: SizeT) -> &mut Self::Output {
        &mut self.vec[index.as_usize()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_index_type_max() {
        let mut array: Array<u8, u32> = Array::default();
        for value in 0..255u32 {
            array.push(value).unwrap();
        }
        assert_eq!(array.len(), 255u8);
        assert_eq!(array.push(255), Err(BeapError::CapacityExceeded { capacity: 255 }));
        assert_eq!(array.len(), 255u8);
        assert_eq!(array.last(), Some(&254));
    }

    #[test]
    fn from_vec_rejects_unrepresentable_length() {
        let result = <Array<u8, u8> as Storage<u8, u8>>::from_vec(vec![0; 256]);
        assert!(result.is_err());
    }

    #[test]
    fn swap_and_index_by_size_type() {
        let mut array = <Array<u16, char> as Storage<u16, char>>::from_vec(vec!['a', 'b', 'c']).unwrap();
        array.swap(0, 2);
        assert_eq!(array[0u16], 'c');
        assert_eq!(array[2u16], 'a');
        array[1u16] = 'z';
        assert_eq!(array.as_slice(), &['c', 'z', 'a']);
    }
}
