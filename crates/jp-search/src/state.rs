//! Heap key with a total order over `f64`.
//!
//! Weights are validated finite and non-negative before a search starts,
//! so `total_cmp` agrees with the usual numeric order here.

use std::cmp::Ordering;

#[derive(Copy, Clone, Debug)]
pub(crate) struct Key(pub(crate) f64);

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
