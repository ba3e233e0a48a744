use crate::coord::Square;

/// A set of board squares, one bit per square.
///
/// A square's bit position is its dense index, so membership tests and
/// updates are O(1) without any lookup table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// The set of all 64 squares.
    #[inline]
    pub const fn full() -> Self {
        SquareSet(u64::MAX)
    }

    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    #[inline]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
