use crate::domain::board::{Board, Orientation};
use crate::domain::state::{GameState, GameStatus};
use crate::domain::test_fixtures::{active_game, board_with, carrier_at_origin, coord, ship, P1, P2};
use crate::domain::transitions::{attack, join, new_game, surrender};
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};

fn assert_validation(err: DomainError, kind: ValidationKind) {
    match err {
        DomainError::Validation(k, _) => assert_eq!(k, kind),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn new_game_starts_open_with_creator_to_move() {
    let game = new_game(P1, board_with(vec![carrier_at_origin()]), false);
    assert_eq!(game.status, GameStatus::Open);
    assert_eq!(game.player2, None);
    assert_eq!(game.turn, Some(P1));
    assert_eq!(game.winner, None);
    assert!(game.boards[1].ships.is_empty());
}

#[test]
fn join_activates_game_without_stealing_the_turn() {
    let mut game = new_game(P1, board_with(vec![carrier_at_origin()]), false);
    join(&mut game, P2, Board::empty()).unwrap();
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.player2, Some(P2));
    // The joining player does not move first.
    assert_eq!(game.turn, Some(P1));
}

#[test]
fn join_rejects_self_join() {
    let mut game = new_game(P1, board_with(vec![carrier_at_origin()]), false);
    let err = join(&mut game, P1, Board::empty()).unwrap_err();
    assert_validation(err, ValidationKind::SelfJoin);
    assert_eq!(game.status, GameStatus::Open);
}

#[test]
fn join_is_idempotently_rejected_once_full() {
    let mut game = active_game(Vec::new());
    let before = game.clone();
    // Regardless of who retries, a filled seat stays filled.
    for joiner in [P2, 42] {
        let err = join(&mut game, joiner, Board::empty()).unwrap_err();
        assert_validation(err, ValidationKind::GameFull);
    }
    assert_eq!(game, before);
}

#[test]
fn attack_requires_an_active_game() {
    let mut game = new_game(P1, board_with(vec![carrier_at_origin()]), false);
    let err = attack(&mut game, P1, P1, coord(0, 0)).unwrap_err();
    assert_validation(err, ValidationKind::GameNotActive);
}

#[test]
fn attack_rejects_non_participants() {
    let mut game = active_game(Vec::new());
    let before = game.clone();
    let err = attack(&mut game, 99, P2, coord(0, 0)).unwrap_err();
    match err {
        DomainError::Forbidden(ForbiddenKind::NotAParticipant, _) => {}
        other => panic!("expected NotAParticipant, got {other:?}"),
    }
    assert_eq!(game, before);
}

#[test]
fn attack_rejects_out_of_turn_and_invalid_target() {
    let mut game = active_game(Vec::new());
    // Turn is with P1.
    let err = attack(&mut game, P2, P1, coord(0, 0)).unwrap_err();
    assert_validation(err, ValidationKind::OutOfTurn);

    let err = attack(&mut game, P1, 99, coord(0, 0)).unwrap_err();
    assert_validation(err, ValidationKind::InvalidTarget);
}

#[test]
fn turn_alternates_strictly_between_participants() {
    // Shipless boards on both sides keep the game running forever.
    let mut game = active_game(Vec::new());
    game.boards[0] = Board::empty();

    let mut expected = P1;
    for step in 0..6u8 {
        let attacker = expected;
        let target = game.opponent_of(attacker).unwrap();
        attack(&mut game, attacker, target, coord(step % 10, step / 10)).unwrap();
        expected = game.opponent_of(attacker).unwrap();
        assert_eq!(game.turn, Some(expected), "turn must flip after attack {step}");
    }
}

#[test]
fn reference_two_player_scenario_runs_to_completion() {
    // P1 creates with a single carrier at (0,0); P2 joins with no ships.
    let mut game = active_game(Vec::new());

    // P1 misses on P2's empty board; turn passes.
    let report = attack(&mut game, P1, P2, coord(3, 3)).unwrap();
    assert!(!report.hit);
    assert_eq!(game.boards[1].cell(coord(3, 3)), crate::domain::CellState::Miss);
    assert_eq!(game.turn, Some(P2));

    // P2 chews through the carrier, P1 missing in between.
    let report = attack(&mut game, P2, P1, coord(0, 0)).unwrap();
    assert!(report.hit);
    assert_eq!(report.sunk_ship, None);
    assert_eq!(game.turn, Some(P1));

    for (i, x) in (1..5).enumerate() {
        attack(&mut game, P1, P2, coord(9 - i as u8, 9)).unwrap();
        let report = attack(&mut game, P2, P1, coord(x, 0)).unwrap();
        assert!(report.hit);
        if x < 4 {
            assert_eq!(report.sunk_ship, None);
            assert!(!report.all_ships_sunk);
        } else {
            // Final carrier cell: the game is decided.
            assert_eq!(report.sunk_ship.as_deref(), Some("carrier"));
            assert!(report.all_ships_sunk);
        }
    }

    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.winner, Some(P2));
    assert_eq!(game.turn, None);
}

#[test]
fn winner_and_completed_are_set_together_and_final() {
    let mut game = active_game(Vec::new());
    surrender(&mut game, P2).unwrap();
    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.winner, Some(P1));
    assert_eq!(game.turn, None);

    // No further mutation of a decided game.
    let err = attack(&mut game, P1, P2, coord(0, 0)).unwrap_err();
    assert_validation(err, ValidationKind::GameNotActive);
    let err = surrender(&mut game, P1).unwrap_err();
    assert_validation(err, ValidationKind::GameNotActive);
}

#[test]
fn surrender_by_non_participant_leaves_state_unchanged() {
    let mut game = active_game(vec![ship("patrol", 2, 4, 4, Orientation::Horizontal)]);
    let before = game.clone();
    let err = surrender(&mut game, 99).unwrap_err();
    match err {
        DomainError::Forbidden(ForbiddenKind::NotAParticipant, _) => {}
        other => panic!("expected NotAParticipant, got {other:?}"),
    }
    assert_eq!(game, before);
}

#[test]
fn surrender_without_an_opponent_is_rejected() {
    // An Active game should always have two players, but a lone
    // participant must not be able to concede to nobody.
    let mut game = GameState {
        player1: P1,
        player2: None,
        vs_ai: false,
        boards: [board_with(vec![carrier_at_origin()]), Board::empty()],
        status: GameStatus::Active,
        turn: Some(P1),
        winner: None,
    };
    let err = surrender(&mut game, P1).unwrap_err();
    assert_validation(err, ValidationKind::NoOpponent);
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.winner, None);
}
