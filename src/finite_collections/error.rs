#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BeapError {
    /// The backing store cannot hold another element.
    #[error("beap capacity of {capacity} elements exceeded")]
    CapacityExceeded { capacity: usize },
}
