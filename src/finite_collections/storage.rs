use std::ops::{Index, IndexMut};

use super::error::BeapError;
use super::size::Size;

/// Flat element store a beap packs its levels into.
pub trait Storage<SizeT, ValueT>: Default + Index<SizeT, Output = ValueT> + IndexMut<SizeT>
where
    SizeT: Size,
{
    fn from_vec(vec: Vec<ValueT>) -> Result<Self, BeapError>;

    fn len(&self) -> SizeT;

    fn is_empty(&self) -> bool;

    /// Most elements the store will ever accept, if bounded.
    fn capacity_limit(&self) -> Option<usize>;

    /// Appends `value`. On error the store is unchanged.
    fn push(&mut self, value: ValueT) -> Result<(), BeapError>;

    fn pop(&mut self) -> Option<ValueT>;

    fn swap(&mut self, a: SizeT, b: SizeT);

    fn reserve(&mut self, additional: SizeT);

    fn clear(&mut self);

    fn as_slice(&self) -> &[ValueT];

    fn into_vec(self) -> Vec<ValueT>;
}
