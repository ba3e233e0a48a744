use std::collections::VecDeque;
use std::fmt;

use crate::board::SquareSet;
use crate::coord::Square;
use crate::movegen::knight_moves;

pub type RecordId = usize;

/// A discovered square plus the record that discovered it. Records live in a
/// `Vec` owned by one search call; `parent` is an index into that arena,
/// `None` for the origin.
#[derive(Copy, Clone, Debug)]
struct MoveRecord {
    square: Square,
    parent: Option<RecordId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Structured errors returned by the path search.
pub enum SearchError {
    /// A coordinate lies outside the 8×8 board.
    InvalidPosition { square: Square },
    /// The frontier was exhausted without reaching the destination. The
    /// knight graph on 8×8 is connected, so this is defensive only.
    NoPath { origin: Square, destination: Square },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidPosition { square } => {
                write!(f, "invalid position: {square} is outside the 8x8 board")
            }
            SearchError::NoPath {
                origin,
                destination,
            } => write!(f, "no path from {origin} to {destination}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Shortest knight path from `origin` to `destination`, origin first,
/// destination last. `shortest_path(a, a)` is `[a]`.
///
/// BFS over the move graph: every move costs 1, each square is removed from
/// the reachable set the moment it is enqueued (so it is discovered exactly
/// once, at its true distance), and the FIFO frontier guarantees the first
/// dequeue of the destination is via a shortest path.
pub fn shortest_path(
    origin: Square,
    destination: Square,
) -> Result<Vec<Square>, SearchError> {
    if !origin.in_bounds() {
        return Err(SearchError::InvalidPosition { square: origin });
    }
    // An out-of-bounds destination can never be dequeued; reject it up front
    // instead of draining the whole frontier.
    if !destination.in_bounds() {
        return Err(SearchError::InvalidPosition {
            square: destination,
        });
    }

    let mut reachable = SquareSet::full();
    reachable.remove(origin);

    let mut records: Vec<MoveRecord> = vec![MoveRecord {
        square: origin,
        parent: None,
    }];
    let mut frontier: VecDeque<RecordId> = VecDeque::new();
    frontier.push_back(0);

    while let Some(id) = frontier.pop_front() {
        let current = records[id].square;
        if current == destination {
            return Ok(walk_back(&records, id));
        }
        for sq in knight_moves(current, &reachable) {
            reachable.remove(sq);
            records.push(MoveRecord {
                square: sq,
                parent: Some(id),
            });
            frontier.push_back(records.len() - 1);
        }
    }

    Err(SearchError::NoPath {
        origin,
        destination,
    })
}

/// Follow parent links from `id` back to the origin record, then reverse into
/// origin→destination order.
fn walk_back(records: &[MoveRecord], id: RecordId) -> Vec<Square> {
    let mut path = vec![records[id].square];
    let mut current = id;
    while let Some(parent) = records[current].parent {
        current = parent;
        path.push(records[current].square);
    }
    path.reverse();
    path
}
