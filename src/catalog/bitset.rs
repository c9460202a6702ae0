//! Bit-level membership sets over a catalog's tile id space

use std::fmt;

use bitvec::prelude::BitVec;

use crate::catalog::tile::TileId;

/// Fixed-capacity bitset recording which tile ids belong to a set
///
/// Capacity covers the catalog's id space (ids are sparse but small), giving
/// O(1) membership tests for the group-membership predicate that neighbor
/// mask computation evaluates once per neighbor per cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileIdSet {
    bits: BitVec,
}

impl TileIdSet {
    /// Create an empty set able to hold ids up to and including `max_id`
    pub fn with_capacity(max_id: TileId) -> Self {
        let mut bits = BitVec::new();
        bits.resize(max_id as usize + 1, false);
        Self { bits }
    }

    /// Insert a tile id, growing the set if the id exceeds capacity
    pub fn insert(&mut self, id: TileId) {
        let position = id as usize;
        if position >= self.bits.len() {
            self.bits.resize(position + 1, false);
        }
        self.bits.set(position, true);
    }

    /// Test tile id membership
    pub fn contains(&self, id: TileId) -> bool {
        self.bits.get(id as usize).as_deref() == Some(&true)
    }

    /// Count ids in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether no ids are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterate member ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(|position| position as TileId)
    }

    /// Create a new set containing ids present in both sets
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let shorter = self.bits.len().min(other.bits.len());
        let mut bits = BitVec::new();
        bits.resize(shorter, false);
        for position in 0..shorter {
            let in_both = self.bits.get(position).as_deref() == Some(&true)
                && other.bits.get(position).as_deref() == Some(&true);
            bits.set(position, in_both);
        }
        Self { bits }
    }
}

impl FromIterator<TileId> for TileIdSet {
    fn from_iter<I: IntoIterator<Item = TileId>>(ids: I) -> Self {
        let mut set = Self::default();
        for id in ids {
            set.insert(id);
        }
        set
    }
}

impl fmt::Display for TileIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<TileId> = self.iter().collect();
        write!(f, "TileIdSet({} ids: {ids:?})", self.len())
    }
}
