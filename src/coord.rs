use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of files/ranks on the board.
pub const BOARD_SIDE: i8 = 8;

/// A board coordinate pair. Valid squares have both components in `0..8`;
/// the components are signed so knight deltas can be applied directly.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIDE).contains(&self.file) && (0..BOARD_SIDE).contains(&self.rank)
    }

    /// The square reached by adding a (Δfile, Δrank) delta. May be out of
    /// bounds; callers filter with [`Square::in_bounds`].
    #[inline]
    pub fn offset(self, dfile: i8, drank: i8) -> Square {
        Square::new(self.file + dfile, self.rank + drank)
    }

    /// Dense index into 64-entry board tables. Only valid for in-bounds squares.
    #[inline]
    pub fn index(self) -> u8 {
        debug_assert!(self.in_bounds());
        (self.rank as u8) * (BOARD_SIDE as u8) + self.file as u8
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}
