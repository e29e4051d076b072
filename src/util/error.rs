use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error produced when indexing any of the crate's collections with an index that has no
/// corresponding element. Carries enough context for a useful panic message.
#[derive(Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The error produced when a collection would need to grow beyond `usize::MAX` elements.
#[derive(Debug, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}
