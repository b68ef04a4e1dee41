//! Game repository: entity <-> domain conversions and persistence calls.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::adapters::games_sea::{GameCreate, GameListFilter, GameUpdateState};
use crate::domain::board::{Board, CellState, Ship, BOARD_SIZE};
use crate::domain::state::{GameState, GameStatus};
use crate::entities::games;
use crate::entities::games::GameStatus as DbGameStatus;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Game domain model: the aggregate state plus persistence metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub state: GameState,
    pub created_at: OffsetDateTime,
    pub started_at: Option<OffsetDateTime>,
    pub ended_at: Option<OffsetDateTime>,
    pub lock_version: i32,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    game.map(Game::try_from).transpose()
}

/// Find game by ID or fail with a game not-found error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Game::try_from(game)
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    state: &GameState,
) -> Result<Game, DomainError> {
    let dto = GameCreate {
        player1_id: state.player1,
        vs_ai: state.vs_ai,
        ships1: encode(&state.boards[0].ships)?,
        ships2: encode(&state.boards[1].ships)?,
        board1_cells: encode(&state.boards[0].cells)?,
        board2_cells: encode(&state.boards[1].cells)?,
        turn: state.turn,
    };
    let game = games_adapter::create_game(conn, dto).await?;
    Game::try_from(game)
}

pub async fn list_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: GameListFilter,
) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::list_games(conn, filter).await?;
    games.into_iter().map(Game::try_from).collect()
}

/// Persist a mutated aggregate state under the optimistic lock.
///
/// `started_at` / `ended_at` are written only when supplied; the caller
/// stamps them on the Open -> Active and -> Completed transitions.
pub async fn update_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    expected_lock_version: i32,
    state: &GameState,
    started_at: Option<OffsetDateTime>,
    ended_at: Option<OffsetDateTime>,
) -> Result<Game, DomainError> {
    let dto = GameUpdateState {
        id,
        expected_lock_version,
        player2_id: state.player2,
        ships1: encode(&state.boards[0].ships)?,
        ships2: encode(&state.boards[1].ships)?,
        board1_cells: encode(&state.boards[0].cells)?,
        board2_cells: encode(&state.boards[1].cells)?,
        status: state.status.into(),
        turn: state.turn,
        winner_id: state.winner,
        started_at,
        ended_at,
    };
    let game = games_adapter::update_state(conn, dto).await?;
    Game::try_from(game)
}

fn encode<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("failed to encode game state: {e}"),
        )
    })
}

fn decode<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
    what: &str,
) -> Result<T, DomainError> {
    serde_json::from_value(value).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("stored {what} is not valid: {e}"),
        )
    })
}

// Conversions between SeaORM models and domain models

impl From<DbGameStatus> for GameStatus {
    fn from(status: DbGameStatus) -> Self {
        match status {
            DbGameStatus::Open => GameStatus::Open,
            DbGameStatus::Active => GameStatus::Active,
            DbGameStatus::Completed => GameStatus::Completed,
        }
    }
}

impl From<GameStatus> for DbGameStatus {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Open => DbGameStatus::Open,
            GameStatus::Active => DbGameStatus::Active,
            GameStatus::Completed => DbGameStatus::Completed,
        }
    }
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, Self::Error> {
        let ships1: Vec<Ship> = decode(model.ships1, "ship list")?;
        let ships2: Vec<Ship> = decode(model.ships2, "ship list")?;
        let cells1: [[CellState; BOARD_SIZE]; BOARD_SIZE] =
            decode(model.board1_cells, "board grid")?;
        let cells2: [[CellState; BOARD_SIZE]; BOARD_SIZE] =
            decode(model.board2_cells, "board grid")?;

        Ok(Self {
            id: model.id,
            state: GameState {
                player1: model.player1_id,
                player2: model.player2_id,
                vs_ai: model.vs_ai,
                boards: [
                    Board {
                        cells: cells1,
                        ships: ships1,
                    },
                    Board {
                        cells: cells2,
                        ships: ships2,
                    },
                ],
                status: model.status.into(),
                turn: model.turn,
                winner: model.winner_id,
            },
            created_at: model.created_at,
            started_at: model.started_at,
            ended_at: model.ended_at,
            lock_version: model.lock_version,
        })
    }
}
