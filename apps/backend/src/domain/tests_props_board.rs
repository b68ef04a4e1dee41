//! Property tests for the board model and turn alternation.

use proptest::prelude::*;

use crate::domain::board::{Board, CellState, Coord};
use crate::domain::test_fixtures::{active_game, board_with, carrier_at_origin};
use crate::domain::transitions::attack;
use crate::errors::domain::{DomainError, ValidationKind};

fn on_board_coord() -> impl Strategy<Value = (i32, i32)> {
    (0..10i32, 0..10i32)
}

proptest! {
    /// Every on-board coordinate can be attacked exactly once: the first
    /// attack lands (hit or miss), the second is always AlreadyAttacked.
    #[test]
    fn first_attack_lands_second_is_rejected((x, y) in on_board_coord()) {
        let mut board = board_with(vec![carrier_at_origin()]);
        let coord = Coord::new(x, y).unwrap();

        prop_assert!(board.apply_attack(coord).is_ok());
        let cell = board.cell(coord);
        prop_assert!(cell == CellState::Hit || cell == CellState::Miss);

        let err = board.apply_attack(coord).unwrap_err();
        prop_assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::AlreadyAttacked, _)
        ));
    }

    /// Off-board coordinates are always rejected and mutate nothing.
    #[test]
    fn out_of_range_coordinates_never_construct(x in -50..50i32, y in -50..50i32) {
        let result = Coord::new(x, y);
        let on_board = (0..10).contains(&x) && (0..10).contains(&y);
        prop_assert_eq!(result.is_ok(), on_board);
    }

    /// A hit is reported exactly when a ship occupies the attacked cell.
    #[test]
    fn hit_iff_ship_geometry_covers_cell((x, y) in on_board_coord()) {
        let mut board = board_with(vec![carrier_at_origin()]);
        let coord = Coord::new(x, y).unwrap();
        let expected_hit = board.ships.iter().any(|s| s.occupies(coord));

        let report = board.apply_attack(coord).unwrap();
        prop_assert_eq!(report.hit, expected_hit);
        let expected_cell = if expected_hit { CellState::Hit } else { CellState::Miss };
        prop_assert_eq!(board.cell(coord), expected_cell);
    }

    /// For any sequence of distinct coordinates fired by whichever player
    /// holds the turn, the turn alternates strictly between the players.
    #[test]
    fn turn_alternates_for_all_attack_sequences(
        coords in proptest::collection::hash_set(on_board_coord(), 1..40)
    ) {
        // Shipless boards on both sides: no attack can end the game.
        let mut game = active_game(Vec::new());
        game.boards[0] = Board::empty();

        for (x, y) in coords {
            let attacker = game.turn.unwrap();
            let target = game.opponent_of(attacker).unwrap();
            attack(&mut game, attacker, target, Coord::new(x, y).unwrap()).unwrap();
            prop_assert_eq!(game.turn, Some(target));
        }
    }
}
