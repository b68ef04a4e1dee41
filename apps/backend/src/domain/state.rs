//! Game aggregate state: players, boards, status, turn, winner.

use serde::{Deserialize, Serialize};

use crate::domain::board::Board;

/// Players are identified by their storage id.
pub type PlayerId = i64;

/// Board index of each side (player 1 owns board 0).
pub const SIDE_ONE: usize = 0;
pub const SIDE_TWO: usize = 1;

/// Game lifecycle: `Open` (waiting for a second player) -> `Active`
/// (alternating attacks) -> `Completed` (winner decided). There are no
/// transitions out of `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Open,
    Active,
    Completed,
}

/// In-memory representation of one match, sufficient for all pure domain
/// operations. Timestamps and the lock version live at the persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player1: PlayerId,
    pub player2: Option<PlayerId>,
    pub vs_ai: bool,
    /// `boards[0]` is player 1's own board, `boards[1]` player 2's.
    pub boards: [Board; 2],
    pub status: GameStatus,
    /// The participant who must act next. Always one of the two player ids
    /// while `Active`, `None` otherwise.
    pub turn: Option<PlayerId>,
    /// Set exactly when `status` is `Completed`.
    pub winner: Option<PlayerId>,
}

impl GameState {
    pub fn is_participant(&self, id: PlayerId) -> bool {
        self.player1 == id || self.player2 == Some(id)
    }

    /// The other participant, if both seats are filled.
    pub fn opponent_of(&self, id: PlayerId) -> Option<PlayerId> {
        if self.player1 == id {
            self.player2
        } else if self.player2 == Some(id) {
            Some(self.player1)
        } else {
            None
        }
    }

    /// Board index owned by the given participant.
    pub fn side_of(&self, id: PlayerId) -> Option<usize> {
        if self.player1 == id {
            Some(SIDE_ONE)
        } else if self.player2 == Some(id) {
            Some(SIDE_TWO)
        } else {
            None
        }
    }
}
