//! Shortest knight paths on the standard 8×8 chessboard.
//!
//! The core is a breadth-first search over the knight-move graph together
//! with parent-link path reconstruction; see [`search::shortest_path`].

pub mod board;
pub mod coord;
pub mod movegen;
pub mod report;
pub mod search;
