mod array;
pub mod beap_index;
mod beap;
mod comparator;
mod error;
mod fixed_array;
mod size;
mod storage;

pub use array::Array;
pub use beap::{Beap, FixedBeap, MinBeap};
pub use beap_index::Span;
pub use comparator::{Comparator, Natural, Reverse};
pub use error::BeapError;
pub use fixed_array::FixedArray;
pub use size::Size;
pub use storage::Storage;
