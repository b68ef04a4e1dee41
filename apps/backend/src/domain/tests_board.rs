use crate::domain::board::{Board, CellState, Coord, Orientation, BOARD_SIZE};
use crate::domain::test_fixtures::{board_with, carrier_at_origin, coord, grid_for, ship};
use crate::errors::domain::{DomainError, ValidationKind};

fn assert_validation(err: DomainError, kind: ValidationKind) {
    match err {
        DomainError::Validation(k, _) => assert_eq!(k, kind),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn coord_rejects_out_of_range() {
    assert_validation(Coord::new(10, 0).unwrap_err(), ValidationKind::OutOfRange);
    assert_validation(Coord::new(0, 10).unwrap_err(), ValidationKind::OutOfRange);
    assert_validation(Coord::new(-1, 3).unwrap_err(), ValidationKind::OutOfRange);
    assert_validation(Coord::new(3, -1).unwrap_err(), ValidationKind::OutOfRange);
    assert!(Coord::new(0, 0).is_ok());
    assert!(Coord::new(9, 9).is_ok());
}

#[test]
fn from_layout_rejects_wrong_grid_dimensions() {
    let short_grid = vec![vec![CellState::Empty; BOARD_SIZE]; BOARD_SIZE - 1];
    let err = Board::from_layout(Vec::new(), short_grid).unwrap_err();
    assert_validation(err, ValidationKind::InvalidLayout);

    let mut ragged = vec![vec![CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
    ragged[4].pop();
    let err = Board::from_layout(Vec::new(), ragged).unwrap_err();
    assert_validation(err, ValidationKind::InvalidLayout);
}

#[test]
fn from_layout_rejects_zero_length_ship() {
    let ships = vec![ship("dinghy", 0, 0, 0, Orientation::Horizontal)];
    let grid = vec![vec![CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
    let err = Board::from_layout(ships, grid).unwrap_err();
    assert_validation(err, ValidationKind::InvalidLayout);
}

#[test]
fn attack_on_open_water_is_a_miss() {
    let mut board = board_with(vec![carrier_at_origin()]);
    let report = board.apply_attack(coord(3, 3)).unwrap();
    assert!(!report.hit);
    assert_eq!(report.sunk_ship, None);
    assert!(!report.all_ships_sunk);
    assert_eq!(board.cell(coord(3, 3)), CellState::Miss);
}

#[test]
fn attack_on_ship_cell_is_a_hit() {
    let mut board = board_with(vec![carrier_at_origin()]);
    let report = board.apply_attack(coord(0, 0)).unwrap();
    assert!(report.hit);
    assert_eq!(report.sunk_ship, None);
    assert!(!report.all_ships_sunk);
    assert_eq!(board.cell(coord(0, 0)), CellState::Hit);
    assert!(!board.ships[0].sunk);
}

#[test]
fn last_cell_hit_sinks_the_ship() {
    let mut board = board_with(vec![ship("destroyer", 2, 5, 5, Orientation::Vertical)]);
    assert!(board.apply_attack(coord(5, 5)).unwrap().sunk_ship.is_none());
    let report = board.apply_attack(coord(5, 6)).unwrap();
    assert_eq!(report.sunk_ship.as_deref(), Some("destroyer"));
    assert!(report.all_ships_sunk);
    assert!(board.ships[0].sunk);
}

#[test]
fn all_ships_sunk_requires_every_ship_down() {
    let mut board = board_with(vec![
        ship("destroyer", 2, 0, 0, Orientation::Horizontal),
        ship("submarine", 3, 0, 2, Orientation::Horizontal),
    ]);
    board.apply_attack(coord(0, 0)).unwrap();
    let report = board.apply_attack(coord(1, 0)).unwrap();
    assert_eq!(report.sunk_ship.as_deref(), Some("destroyer"));
    assert!(!report.all_ships_sunk);

    board.apply_attack(coord(0, 2)).unwrap();
    board.apply_attack(coord(1, 2)).unwrap();
    let report = board.apply_attack(coord(2, 2)).unwrap();
    assert_eq!(report.sunk_ship.as_deref(), Some("submarine"));
    assert!(report.all_ships_sunk);
}

#[test]
fn reattacking_a_terminal_cell_is_rejected() {
    let mut board = board_with(vec![carrier_at_origin()]);
    board.apply_attack(coord(0, 0)).unwrap();
    board.apply_attack(coord(3, 3)).unwrap();

    let err = board.apply_attack(coord(0, 0)).unwrap_err();
    assert_validation(err, ValidationKind::AlreadyAttacked);
    let err = board.apply_attack(coord(3, 3)).unwrap_err();
    assert_validation(err, ValidationKind::AlreadyAttacked);

    // The failed attacks changed nothing.
    assert_eq!(board.cell(coord(0, 0)), CellState::Hit);
    assert_eq!(board.cell(coord(3, 3)), CellState::Miss);
}

#[test]
fn ship_marker_without_geometry_resolves_as_miss() {
    // A client-supplied grid claiming a ship where none is placed: the
    // stored geometry decides the outcome.
    let ships = vec![carrier_at_origin()];
    let mut grid = grid_for(&ships);
    grid[7][7] = CellState::Ship;
    let mut board = Board::from_layout(ships, grid).unwrap();

    let report = board.apply_attack(coord(7, 7)).unwrap();
    assert!(!report.hit);
    assert_eq!(board.cell(coord(7, 7)), CellState::Miss);
}

#[test]
fn shipless_board_is_never_defeated() {
    let mut board = Board::empty();
    for x in 0..3 {
        let report = board.apply_attack(coord(x, 0)).unwrap();
        assert!(!report.hit);
        assert!(!report.all_ships_sunk);
    }
}
