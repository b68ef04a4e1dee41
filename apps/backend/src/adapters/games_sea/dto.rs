//! DTOs for games_sea adapter.

use sea_orm::Condition;
use sea_orm::ColumnTrait;
use time::OffsetDateTime;

use crate::entities::games::{self, GameStatus};

/// DTO for inserting a new game row.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub player1_id: i64,
    pub vs_ai: bool,
    pub ships1: serde_json::Value,
    pub ships2: serde_json::Value,
    pub board1_cells: serde_json::Value,
    pub board2_cells: serde_json::Value,
    pub turn: Option<i64>,
}

/// DTO for rewriting a game's mutable state under optimistic locking.
///
/// Join, attack and surrender all produce a full new aggregate state, so
/// the update always writes every mutable column. `expected_lock_version`
/// must match the row or the update fails with a structured conflict.
#[derive(Debug, Clone)]
pub struct GameUpdateState {
    pub id: i64,
    pub expected_lock_version: i32,
    pub player2_id: Option<i64>,
    pub ships1: serde_json::Value,
    pub ships2: serde_json::Value,
    pub board1_cells: serde_json::Value,
    pub board2_cells: serde_json::Value,
    pub status: GameStatus,
    pub turn: Option<i64>,
    pub winner_id: Option<i64>,
    /// Set only when transitioning into `Active`; never cleared.
    pub started_at: Option<OffsetDateTime>,
    /// Set only when transitioning into `Completed`; never cleared.
    pub ended_at: Option<OffsetDateTime>,
}

/// Participation/status predicates for the game listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameListFilter {
    /// My Open games still waiting for an opponent.
    MyOpen { viewer: i64 },
    /// Open games created by someone else (joinable).
    OpenForOthers { viewer: i64 },
    /// Games I participate in with the given status.
    MyParticipating { viewer: i64, status: GameStatus },
    /// Running or finished games I am not part of.
    OtherGames { viewer: i64 },
    /// Default for an authenticated viewer: my games plus every
    /// Active/Completed game.
    MineOrPublic { viewer: i64 },
    /// Anonymous listing narrowed to one status.
    ByStatus { status: GameStatus },
    /// Anonymous default: everything Active or Completed.
    Public,
}

impl GameListFilter {
    pub fn condition(&self) -> Condition {
        let participant = |viewer: i64| {
            Condition::any()
                .add(games::Column::Player1Id.eq(viewer))
                .add(games::Column::Player2Id.eq(viewer))
        };
        let public_statuses = || {
            games::Column::Status.is_in([GameStatus::Active, GameStatus::Completed])
        };

        match *self {
            GameListFilter::MyOpen { viewer } => Condition::all()
                .add(games::Column::Status.eq(GameStatus::Open))
                .add(games::Column::Player1Id.eq(viewer))
                .add(games::Column::Player2Id.is_null()),
            GameListFilter::OpenForOthers { viewer } => Condition::all()
                .add(games::Column::Status.eq(GameStatus::Open))
                .add(games::Column::Player1Id.ne(viewer))
                .add(games::Column::Player2Id.is_null()),
            GameListFilter::MyParticipating { viewer, status } => Condition::all()
                .add(games::Column::Status.eq(status))
                .add(participant(viewer)),
            GameListFilter::OtherGames { viewer } => Condition::all()
                .add(public_statuses())
                .add(games::Column::Player1Id.ne(viewer))
                .add(
                    Condition::any()
                        .add(games::Column::Player2Id.is_null())
                        .add(games::Column::Player2Id.ne(viewer)),
                )
                .add(
                    Condition::any()
                        .add(games::Column::Player2Id.is_not_null())
                        .add(games::Column::Status.eq(GameStatus::Completed)),
                ),
            GameListFilter::MineOrPublic { viewer } => Condition::any()
                .add(games::Column::Player1Id.eq(viewer))
                .add(games::Column::Player2Id.eq(viewer))
                .add(public_statuses()),
            GameListFilter::ByStatus { status } => {
                Condition::all().add(games::Column::Status.eq(status))
            }
            GameListFilter::Public => Condition::all().add(public_statuses()),
        }
    }
}
