//! Visited markers keyed by dictionary position.

use bit_vec::BitVec;

/// One bit per dictionary entry, set once the entry has been discovered.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    bits: BitVec,
}

impl VisitedSet {
    pub fn new(len: usize) -> Self {
        Self {
            bits: BitVec::from_elem(len, false),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Out-of-range indices read as unvisited.
    pub fn is_visited(&self, index: usize) -> bool {
        self.bits.get(index).unwrap_or(false)
    }

    /// Mark `index` as visited. Returns `true` if it was not visited before;
    /// out-of-range indices are ignored.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.bits.get(index) {
            Some(false) => {
                self.bits.set(index, true);
                true
            }
            _ => false,
        }
    }

    /// Number of visited entries
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|bit| *bit).count()
    }

    pub fn reset(&mut self) {
        self.bits = BitVec::from_elem(self.bits.len(), false);
    }
}
