use serde::{Deserialize, Serialize};

use crate::coord::Square;

/// A solved path in exportable form, consumed by the `knight_path` binary's
/// JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathReport {
    pub origin: Square,
    pub destination: Square,
    /// Number of moves, i.e. `path.len() - 1`.
    pub moves: usize,
    pub path: Vec<Square>,
}

impl PathReport {
    /// Builds a report from a non-empty origin→destination path as returned
    /// by [`crate::search::shortest_path`].
    pub fn new(path: Vec<Square>) -> Self {
        debug_assert!(!path.is_empty());
        Self {
            origin: path[0],
            destination: path[path.len() - 1],
            moves: path.len() - 1,
            path,
        }
    }
}
