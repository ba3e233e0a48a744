use knights_travails::coord::Square;
use knights_travails::search::{shortest_path, SearchError};

#[test]
fn single_move_when_destination_is_a_knight_hop_away() {
    let path = shortest_path(Square::new(0, 0), Square::new(1, 2)).unwrap();
    assert_eq!(path, vec![Square::new(0, 0), Square::new(1, 2)]);
}

#[test]
fn adjacent_square_takes_three_moves() {
    // The original worked example: "You made it in 3 moves!"
    let path = shortest_path(Square::new(3, 3), Square::new(4, 3)).unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path[0], Square::new(3, 3));
    assert_eq!(path[3], Square::new(4, 3));
}

#[test]
fn corner_to_corner_takes_six_moves() {
    let path = shortest_path(Square::new(0, 0), Square::new(7, 7)).unwrap();
    assert_eq!(path.len(), 7);
}

#[test]
fn origin_equals_destination_is_a_zero_move_path() {
    let path = shortest_path(Square::new(0, 0), Square::new(0, 0)).unwrap();
    assert_eq!(path, vec![Square::new(0, 0)]);
}

#[test]
fn diagonal_neighbour_of_corner_takes_four_moves() {
    // (1,1) is the classic worst case near a corner.
    let path = shortest_path(Square::new(0, 0), Square::new(1, 1)).unwrap();
    assert_eq!(path.len(), 5);
}

#[test]
fn out_of_bounds_origin_is_rejected() {
    let err = shortest_path(Square::new(8, 0), Square::new(0, 0)).unwrap_err();
    assert_eq!(
        err,
        SearchError::InvalidPosition {
            square: Square::new(8, 0)
        }
    );
}

#[test]
fn out_of_bounds_destination_is_rejected_before_searching() {
    let err = shortest_path(Square::new(0, 0), Square::new(0, -1)).unwrap_err();
    assert_eq!(
        err,
        SearchError::InvalidPosition {
            square: Square::new(0, -1)
        }
    );
}
