use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::slice::Iter;

use log::{debug, trace};

use super::array::Array;
use super::beap_index::{self, Span};
use super::comparator::{Comparator, Natural, Reverse};
use super::error::BeapError;
use super::fixed_array::FixedArray;
use super::size::Size;
use super::storage::Storage;

/// Bi-parental heap: elements packed level by level into a flat store, each
/// one not greater than either of its parents under `CompareT`.
///
/// `search`, `insert` and `remove` all run in O(√N).
pub struct Beap<SizeT, ValueT, CompareT = Natural, StorageT = Array<SizeT, ValueT>>
where
    SizeT: Size,
    CompareT: Comparator<ValueT>,
    StorageT: Storage<SizeT, ValueT>,
{
    storage: StorageT,
    /// Highest level holding an element; `None` while empty.
    height: Option<SizeT>,
    phantom: PhantomData<(ValueT, CompareT)>,
}

/// Beap whose root holds the minimum.
pub type MinBeap<SizeT, ValueT> = Beap<SizeT, ValueT, Reverse>;

/// Beap that never holds more than `CAPACITY` elements.
pub type FixedBeap<SizeT, ValueT, const CAPACITY: usize> =
    Beap<SizeT, ValueT, Natural, FixedArray<SizeT, ValueT, CAPACITY>>;

impl<SizeT, ValueT, CompareT, StorageT> Default for Beap<SizeT, ValueT, CompareT, StorageT>
where
    SizeT: Size,
    CompareT: Comparator<ValueT>,
    StorageT: Storage<SizeT, ValueT>,
{
    fn default() -> Self {
        Beap { storage: StorageT::default(), height: None, phantom: PhantomData }
    }
}

impl<SizeT, ValueT, CompareT, StorageT> Clone for Beap<SizeT, ValueT, CompareT, StorageT>
where
    SizeT: Size,
    CompareT: Comparator<ValueT>,
    StorageT: Storage<SizeT, ValueT> + Clone,
{
    fn clone(&self) -> Self {
        Beap { storage: self.storage.clone(), height: self.height, phantom: PhantomData }
    }
}

impl<SizeT, ValueT, CompareT, StorageT> fmt::Debug for Beap<SizeT, ValueT, CompareT, StorageT>
where
    SizeT: Size,
    ValueT: fmt::Debug,
    CompareT: Comparator<ValueT>,
    StorageT: Storage<SizeT, ValueT>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Beap").field("height", &self.height).field("elements", &self.storage.as_slice()).finish()
    }
}

impl<SizeT, ValueT, CompareT, StorageT> Beap<SizeT, ValueT, CompareT, StorageT>
where
    SizeT: Size,
    CompareT: Comparator<ValueT>,
    StorageT: Storage<SizeT, ValueT>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: SizeT) -> Self {
        let mut beap = Self::default();
        beap.storage.reserve(capacity);
        beap
    }

    /// Builds a beap from `vec` in one pass. The elements are ordered
    /// greatest first, which satisfies the beap order, and the height is
    /// derived once from the final size.
    pub fn from_vec(mut vec: Vec<ValueT>) -> Result<Self, BeapError> {
        let limit = beap_index::max_len::<SizeT>().as_usize();
        if vec.len() > limit {
            return Err(BeapError::CapacityExceeded { capacity: limit });
        }
        vec.sort_by(|lhs, rhs| CompareT::compare(rhs, lhs));
        let storage = StorageT::from_vec(vec)?;
        let height = if storage.is_empty() { None } else { Some(beap_index::level_of(storage.len() - SizeT::ONE)) };
        debug!("bulk-loaded {} elements into a beap of height {:?}", storage.len(), height);
        Ok(Beap { storage, height, phantom: PhantomData })
    }

    #[inline(always)]
    pub fn len(&self) -> SizeT {
        self.storage.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Highest occupied level, `None` if the beap is empty.
    #[inline(always)]
    pub fn height(&self) -> Option<SizeT> {
        self.height
    }

    /// Most elements this beap can hold.
    pub fn capacity_limit(&self) -> usize {
        let limit = beap_index::max_len::<SizeT>().as_usize();
        self.storage.capacity_limit().map_or(limit, |capacity| capacity.min(limit))
    }

    /// The greatest element.
    pub fn peek(&self) -> Option<&ValueT> {
        self.storage.as_slice().first()
    }

    pub fn get(&self, index: SizeT) -> Option<&ValueT> {
        self.storage.as_slice().get(index.as_usize())
    }

    /// Elements in storage order, which is not sorted order.
    pub fn iter(&self) -> Iter<ValueT> {
        self.storage.as_slice().iter()
    }

    pub fn as_slice(&self) -> &[ValueT] {
        self.storage.as_slice()
    }

    /// Elements of each occupied level, root first. The top level may be
    /// partial.
    pub fn levels(&self) -> impl Iterator<Item = &[ValueT]> + '_ {
        let elements = self.storage.as_slice();
        let mut span = self.height.map(|_| beap_index::level_span(SizeT::ZERO));
        std::iter::from_fn(move || {
            let current = span.filter(|current| current.first.as_usize() < elements.len())?;
            span = beap_index::next_level_span(current);
            let last = current.last.as_usize().min(elements.len() - 1);
            Some(&elements[current.first.as_usize()..=last])
        })
    }

    pub fn clear(&mut self) {
        self.storage.clear();
        self.height = None;
    }

    pub fn into_vec(self) -> Vec<ValueT> {
        self.storage.into_vec()
    }

    pub fn contains(&self, value: &ValueT) -> bool {
        self.search(value).is_some()
    }

    /// Finds an element equal to `value`, returning its linear index and
    /// level.
    ///
    /// The walk starts at the first column of the top level. A greater value
    /// moves one level up in the same column; a smaller one moves down to the
    /// `column + 1` child, or right along the level when that child is not
    /// stored. Every step either changes level or advances a column, so at
    /// most O(√N) elements are compared.
    pub fn search(&self, value: &ValueT) -> Option<(SizeT, SizeT)> {
        let mut level = self.height?;
        let mut span = beap_index::level_span(level);
        let mut index = span.first;
        let last = self.storage.len() - SizeT::ONE;
        loop {
            match CompareT::compare(value, &self.storage[index]) {
                Ordering::Equal => return Some((index, level)),
                Ordering::Greater => {
                    (index, span) = Self::ascend(index, span)?;
                    level = level - SizeT::ONE;
                }
                Ordering::Less if index == last => {
                    (index, span) = Self::ascend(index, span)?;
                    level = level - SizeT::ONE;
                }
                Ordering::Less => {
                    let below = beap_index::next_level_span(span)
                        .map(|next| (next.first + (index - span.first) + SizeT::ONE, next))
                        .filter(|&(child, _)| child <= last);
                    if let Some((child, next)) = below {
                        index = child;
                        span = next;
                        level = level + SizeT::ONE;
                    } else if index == span.last {
                        return None;
                    } else {
                        index = index + SizeT::ONE;
                    }
                }
            }
        }
    }

    /// Same column one level closer to the root, unless `index` is the last
    /// column of its level.
    #[inline(always)]
    fn ascend(index: SizeT, span: Span<SizeT>) -> Option<(SizeT, Span<SizeT>)> {
        if index == span.last {
            return None;
        }
        let prev = beap_index::prev_level_span(span)?;
        Some((prev.first + (index - span.first), prev))
    }

    /// Adds `value` and returns the index it settled at.
    pub fn insert(&mut self, value: ValueT) -> Result<SizeT, BeapError> {
        let index = self.storage.len();
        if index >= beap_index::max_len::<SizeT>() {
            let capacity = beap_index::max_len::<SizeT>().as_usize();
            debug!("rejected insert into a full beap of {} elements", capacity);
            return Err(BeapError::CapacityExceeded { capacity });
        }
        if let Err(error) = self.storage.push(value) {
            debug!("rejected insert: {}", error);
            return Err(error);
        }
        let level = match self.height {
            None => SizeT::ZERO,
            Some(height) if index - beap_index::triangular(height) > height => height + SizeT::ONE,
            Some(height) => height,
        };
        if self.height != Some(level) {
            trace!("beap height grew to {}", level);
            self.height = Some(level);
        }
        Ok(self.filter_up(index, level))
    }

    /// Removes one element equal to `value`.
    pub fn remove(&mut self, value: &ValueT) -> Option<ValueT> {
        let (index, level) = self.search(value)?;
        self.remove_at(index, level)
    }

    /// Removes and returns the greatest element.
    pub fn pop(&mut self) -> Option<ValueT> {
        self.remove_at(SizeT::ZERO, SizeT::ZERO)
    }

    /// Removes the element at `index`, which must lie on `level` (as returned
    /// by `search`). Returns `None` if `index` is not stored.
    ///
    /// # Panics
    ///
    /// Panics if `index` is stored but does not lie on `level`.
    pub fn remove_at(&mut self, index: SizeT, level: SizeT) -> Option<ValueT> {
        let height = self.height?;
        if index >= self.storage.len() {
            return None;
        }
        assert!(
            level <= height && beap_index::level_span(level).contains(index),
            "index {} does not lie on level {}",
            index,
            level
        );
        let last_index = self.storage.len() - SizeT::ONE;
        if last_index == beap_index::triangular(height) {
            self.height = height.checked_sub(&SizeT::ONE);
            trace!("beap height shrank to {:?}", self.height);
        }
        let last = self.storage.pop()?;
        if index == last_index {
            return Some(last);
        }
        let removed = std::mem::replace(&mut self.storage[index], last);
        if self.filter_down(index, level) == index {
            self.filter_up(index, level);
        }
        Some(removed)
    }

    #[inline(always)]
    fn less(&self, lhs: SizeT, rhs: SizeT) -> bool {
        CompareT::compare(&self.storage[lhs], &self.storage[rhs]) == Ordering::Less
    }

    /// Moves the element at `index` toward the root while it is greater than
    /// the smaller of its parents. Returns where it stopped.
    fn filter_up(&mut self, mut index: SizeT, mut level: SizeT) -> SizeT {
        while level > SizeT::ZERO {
            let column = index - beap_index::triangular(level);
            let parent = match (beap_index::up_parent(level, column), beap_index::left_parent(level, column)) {
                (Some(up), Some(left)) => {
                    if self.less(up, left) {
                        up
                    } else {
                        left
                    }
                }
                (Some(parent), None) | (None, Some(parent)) => parent,
                (None, None) => unreachable!("element {} on level {} has no parent", index, level),
            };
            if !self.less(parent, index) {
                break;
            }
            self.storage.swap(parent, index);
            index = parent;
            level = level - SizeT::ONE;
        }
        index
    }

    /// Moves the element at `index` toward the leaves while it is less than
    /// the greater of its children. Returns where it stopped.
    fn filter_down(&mut self, mut index: SizeT, mut level: SizeT) -> SizeT {
        loop {
            let column = index - beap_index::triangular(level);
            let child = match beap_index::children(level, column, self.storage.len()) {
                (Some(left), Some(right)) => {
                    if self.less(left, right) {
                        right
                    } else {
                        left
                    }
                }
                (Some(child), None) | (None, Some(child)) => child,
                (None, None) => break,
            };
            if !self.less(index, child) {
                break;
            }
            self.storage.swap(index, child);
            index = child;
            level = level + SizeT::ONE;
        }
        index
    }
}

impl<SizeT, ValueT, CompareT, StorageT> TryFrom<Vec<ValueT>> for Beap<SizeT, ValueT, CompareT, StorageT>
where
    SizeT: Size,
    CompareT: Comparator<ValueT>,
    StorageT: Storage<SizeT, ValueT>,
{
    type Error = BeapError;

    fn try_from(vec: Vec<ValueT>) -> Result<Self, Self::Error> {
        Self::from_vec(vec)
    }
}

impl<'a, SizeT, ValueT, CompareT, StorageT> IntoIterator for &'a Beap<SizeT, ValueT, CompareT, StorageT>
where
    SizeT: Size,
    CompareT: Comparator<ValueT>,
    StorageT: Storage<SizeT, ValueT>,
{
    type Item = &'a ValueT;
    type IntoIter = Iter<'a, ValueT>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
