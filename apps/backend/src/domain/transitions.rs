//! Pure state-machine transitions for one game aggregate.
//!
//! Each operation validates the caller and the game's lifecycle, then
//! mutates the in-memory `GameState`. Persistence, timestamps and locking
//! are the caller's concern; everything here is DB-free and synchronous.

use crate::domain::board::{AttackReport, Board, Coord};
use crate::domain::state::{GameState, GameStatus, PlayerId};
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};

/// Create a new match. The creator's board is already validated; side 2
/// starts empty. The creator moves first once an opponent joins.
pub fn new_game(creator: PlayerId, board: Board, vs_ai: bool) -> GameState {
    GameState {
        player1: creator,
        player2: None,
        vs_ai,
        boards: [board, Board::empty()],
        status: GameStatus::Open,
        turn: Some(creator),
        winner: None,
    }
}

/// Second player joins an open game with their own layout.
///
/// The turn is deliberately left as set at creation: the joining player
/// does not move first.
pub fn join(state: &mut GameState, joiner: PlayerId, board: Board) -> Result<(), DomainError> {
    if state.player1 == joiner {
        return Err(DomainError::validation(
            ValidationKind::SelfJoin,
            "You cannot join your own game",
        ));
    }
    if state.player2.is_some() {
        return Err(DomainError::validation(
            ValidationKind::GameFull,
            "Game is full or already started",
        ));
    }
    if state.status != GameStatus::Open {
        return Err(DomainError::validation(
            ValidationKind::GameNotOpen,
            "This game is not open to join",
        ));
    }

    state.player2 = Some(joiner);
    state.boards[1] = board;
    state.status = GameStatus::Active;
    Ok(())
}

/// Resolve one attack against the target's board.
///
/// The outcome (hit/miss/sunk/all-sunk) is computed by the board model; on
/// a decisive attack the attacker wins and the game completes, otherwise
/// the turn flips to the attacker's opponent.
pub fn attack(
    state: &mut GameState,
    attacker: PlayerId,
    target: PlayerId,
    coord: Coord,
) -> Result<AttackReport, DomainError> {
    if state.status != GameStatus::Active {
        return Err(DomainError::validation(
            ValidationKind::GameNotActive,
            "Game not started or already ended",
        ));
    }
    if state.winner.is_some() {
        return Err(DomainError::validation(
            ValidationKind::GameAlreadyDecided,
            "Game already has a winner",
        ));
    }
    if !state.is_participant(attacker) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotAParticipant,
            "You are not a player in this game",
        ));
    }
    if state.turn != Some(attacker) {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Not your turn",
        ));
    }
    let side = state.side_of(target).ok_or_else(|| {
        DomainError::validation(ValidationKind::InvalidTarget, "Invalid target player")
    })?;

    let report = state.boards[side].apply_attack(coord)?;

    if report.all_ships_sunk {
        state.status = GameStatus::Completed;
        state.winner = Some(attacker);
        state.turn = None;
    } else {
        // Strict alternation. None only if the defender has no opponent,
        // which cannot arise for an Active two-player game.
        state.turn = state.opponent_of(attacker);
    }
    Ok(report)
}

/// Concede the match: the other participant wins immediately.
pub fn surrender(state: &mut GameState, who: PlayerId) -> Result<(), DomainError> {
    if state.status != GameStatus::Active {
        return Err(DomainError::validation(
            ValidationKind::GameNotActive,
            "Game is not currently active, cannot surrender",
        ));
    }
    if state.winner.is_some() {
        return Err(DomainError::validation(
            ValidationKind::GameAlreadyDecided,
            "Game already has a winner",
        ));
    }
    if !state.is_participant(who) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotAParticipant,
            "You are not a player in this game, cannot surrender",
        ));
    }
    let winner = state.opponent_of(who).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NoOpponent,
            "Opponent does not exist, cannot surrender",
        )
    })?;

    state.status = GameStatus::Completed;
    state.winner = Some(winner);
    state.turn = None;
    Ok(())
}
