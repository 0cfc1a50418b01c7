//! Bi-parental heaps ("beaps"): implicit, array-backed triangular heaps with
//! O(√N) search, insertion and deletion.
//!
//! ```
//! use beap::Beap;
//!
//! let mut beap: Beap<usize, i32> = Beap::from_vec(vec![3, 9, 4]).unwrap();
//! beap.insert(7).unwrap();
//! assert_eq!(beap.peek(), Some(&9));
//! assert!(beap.search(&4).is_some());
//! assert_eq!(beap.remove(&9), Some(9));
//! assert_eq!(beap.search(&9), None);
//! ```

pub mod finite_collections;

pub use finite_collections::{
    beap_index, Array, Beap, BeapError, Comparator, FixedArray, FixedBeap, MinBeap, Natural, Reverse, Size, Span,
    Storage,
};
