use crate::board::SquareSet;
use crate::coord::Square;

/// The 8 knight deltas, in a fixed order so move generation (and therefore
/// every search result) is deterministic.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knight destinations from `from` that are on the board and still members of
/// `reachable`. Pure function of its inputs; empty when nothing qualifies.
pub fn knight_moves(from: Square, reachable: &SquareSet) -> Vec<Square> {
    let mut moves = Vec::with_capacity(KNIGHT_DELTAS.len());
    for (dfile, drank) in KNIGHT_DELTAS {
        let to = from.offset(dfile, drank);
        if to.in_bounds() && reachable.contains(to) {
            moves.push(to);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_moves_center_has_eight() {
        let all = SquareSet::full();
        assert_eq!(knight_moves(Square::new(0, 0), &all).len(), 2);
        assert_eq!(knight_moves(Square::new(3, 3), &all).len(), 8);
    }

    #[test]
    fn filters_against_reachable_set() {
        let mut reachable = SquareSet::full();
        reachable.remove(Square::new(1, 2));
        let moves = knight_moves(Square::new(0, 0), &reachable);
        assert_eq!(moves, vec![Square::new(2, 1)]);
    }
}
