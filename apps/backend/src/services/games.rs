//! Game operations: create, join, attack, surrender, fetch and listing.
//!
//! Each mutating operation is a read-modify-write over one aggregate: load
//! the game, run the pure transition, persist under the optimistic lock.
//! Callers run these inside `with_txn` so the read and the guarded write
//! share one transaction.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::adapters::games_sea::GameListFilter;
use crate::domain::board::{Board, CellState, Coord, Ship, BOARD_SIZE};
use crate::domain::state::{GameStatus, PlayerId};
use crate::domain::transitions;
use crate::errors::domain::DomainError;
use crate::repos::games::{self, Game};
use crate::repos::users;

/// Wire representation of a game, with player ids expanded to usernames.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: i64,
    pub player1: PlayerRef,
    pub player2: Option<PlayerRef>,
    #[serde(rename = "isVsAI")]
    pub vs_ai: bool,
    pub ships1: Vec<Ship>,
    pub ships2: Vec<Ship>,
    pub board1_cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    pub board2_cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    pub status: GameStatus,
    pub turn: Option<PlayerId>,
    pub winner: Option<PlayerRef>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub username: String,
}

/// Create a new game from the creator's layout. The creator moves first.
pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    creator: PlayerId,
    ships: Vec<Ship>,
    cells: Vec<Vec<CellState>>,
    vs_ai: bool,
) -> Result<GameView, DomainError> {
    let board = Board::from_layout(ships, cells)?;
    let state = transitions::new_game(creator, board, vs_ai);
    let game = games::create_game(conn, &state).await?;
    info!(game_id = game.id, player1 = creator, "game created");
    into_view(conn, game).await
}

/// Join an open game as the second player.
pub async fn join_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    joiner: PlayerId,
    ships: Vec<Ship>,
    cells: Vec<Vec<CellState>>,
) -> Result<GameView, DomainError> {
    let board = Board::from_layout(ships, cells)?;
    let mut game = games::require_game(conn, game_id).await?;

    transitions::join(&mut game.state, joiner, board)?;

    let started_at = Some(OffsetDateTime::now_utc());
    let game = games::update_state(
        conn,
        game.id,
        game.lock_version,
        &game.state,
        started_at,
        None,
    )
    .await?;
    info!(game_id, player2 = joiner, "game joined");
    into_view(conn, game).await
}

/// Resolve one attack. The outcome is computed from the stored ship
/// geometry; any client-claimed outcome was discarded at the route layer.
pub async fn attack<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    attacker: PlayerId,
    target: PlayerId,
    x: i32,
    y: i32,
) -> Result<GameView, DomainError> {
    let coord = Coord::new(x, y)?;
    let mut game = games::require_game(conn, game_id).await?;

    let report = transitions::attack(&mut game.state, attacker, target, coord)?;

    let ended_at = report
        .all_ships_sunk
        .then(OffsetDateTime::now_utc);
    let game = games::update_state(
        conn,
        game.id,
        game.lock_version,
        &game.state,
        None,
        ended_at,
    )
    .await?;
    info!(
        game_id,
        attacker,
        target,
        hit = report.hit,
        sunk_ship = report.sunk_ship.as_deref(),
        decided = report.all_ships_sunk,
        "attack resolved"
    );
    into_view(conn, game).await
}

/// Concede the game to the opponent.
pub async fn surrender<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    who: PlayerId,
) -> Result<GameView, DomainError> {
    let mut game = games::require_game(conn, game_id).await?;

    transitions::surrender(&mut game.state, who)?;

    let ended_at = Some(OffsetDateTime::now_utc());
    let game = games::update_state(conn, game.id, game.lock_version, &game.state, None, ended_at)
        .await?;
    info!(game_id, surrendered = who, "game conceded");
    into_view(conn, game).await
}

pub async fn get_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<GameView, DomainError> {
    let game = games::require_game(conn, game_id).await?;
    into_view(conn, game).await
}

/// List games for the caller, applying the original listing predicates.
///
/// With a viewer, `type` selects a participation slice; anonymously only
/// Active/Completed games are visible, optionally narrowed by
/// `status_filter`.
pub async fn list_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    viewer: Option<PlayerId>,
    type_param: Option<&str>,
    status_filter: Option<&str>,
) -> Result<Vec<GameView>, DomainError> {
    use crate::entities::games::GameStatus as DbGameStatus;

    let filter = match viewer {
        Some(viewer) => match type_param {
            Some("my_open") => GameListFilter::MyOpen { viewer },
            Some("open_for_others") => GameListFilter::OpenForOthers { viewer },
            Some("my_active") => GameListFilter::MyParticipating {
                viewer,
                status: DbGameStatus::Active,
            },
            Some("my_completed") => GameListFilter::MyParticipating {
                viewer,
                status: DbGameStatus::Completed,
            },
            Some("other_games") => GameListFilter::OtherGames { viewer },
            _ => GameListFilter::MineOrPublic { viewer },
        },
        None => match status_filter {
            Some("Active") => GameListFilter::ByStatus {
                status: DbGameStatus::Active,
            },
            Some("Completed") => GameListFilter::ByStatus {
                status: DbGameStatus::Completed,
            },
            _ => GameListFilter::Public,
        },
    };

    let games = games::list_games(conn, filter).await?;
    let mut views = Vec::with_capacity(games.len());
    for game in games {
        views.push(into_view(conn, game).await?);
    }
    Ok(views)
}

/// Expand player ids to usernames and flatten the aggregate for the wire.
async fn into_view<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: Game,
) -> Result<GameView, DomainError> {
    let state = game.state;

    let player1 = player_ref(conn, state.player1).await?;
    let player2 = match state.player2 {
        Some(id) => Some(player_ref(conn, id).await?),
        None => None,
    };
    let winner = match state.winner {
        Some(id) if id == player1.id => Some(player1.clone()),
        Some(id) => match &player2 {
            Some(p2) if p2.id == id => Some(p2.clone()),
            _ => Some(player_ref(conn, id).await?),
        },
        None => None,
    };

    let [board1, board2] = state.boards;
    Ok(GameView {
        id: game.id,
        player1,
        player2,
        vs_ai: state.vs_ai,
        ships1: board1.ships,
        ships2: board2.ships,
        board1_cells: board1.cells,
        board2_cells: board2.cells,
        status: state.status,
        turn: state.turn,
        winner,
        created_at: game.created_at,
        started_at: game.started_at,
        ended_at: game.ended_at,
    })
}

async fn player_ref<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: PlayerId,
) -> Result<PlayerRef, DomainError> {
    let user = users::require_user(conn, id).await?;
    Ok(PlayerRef {
        id: user.id,
        username: user.username,
    })
}
