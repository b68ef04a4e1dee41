//! SeaORM adapter for the game repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameListFilter, GameUpdateState};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or return a structured not-found error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{game_id}")))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        id: NotSet,
        player1_id: Set(dto.player1_id),
        player2_id: Set(None),
        vs_ai: Set(dto.vs_ai),
        ships1: Set(dto.ships1),
        ships2: Set(dto.ships2),
        board1_cells: Set(dto.board1_cells),
        board2_cells: Set(dto.board2_cells),
        status: Set(games::GameStatus::Open),
        turn: Set(dto.turn),
        winner_id: Set(None),
        created_at: Set(time::OffsetDateTime::now_utc()),
        started_at: NotSet,
        ended_at: NotSet,
        lock_version: Set(1),
    };

    game_active.insert(conn).await
}

/// List games matching the filter, newest first.
pub async fn list_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: GameListFilter,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(filter.condition())
        .order_by_desc(games::Column::CreatedAt)
        .all(conn)
        .await
}

/// Rewrite a game's mutable state with an optimistic lock version check.
///
/// `rows_affected == 0` with an existing row means the lock version moved
/// under us; that is reported as a structured `OPTIMISTIC_LOCK` payload so
/// `map_db_err` can turn it into a conflict with both versions attached.
pub async fn update_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdateState,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let mut update = games::Entity::update_many()
        .col_expr(games::Column::Player2Id, Expr::val(dto.player2_id).into())
        .col_expr(games::Column::Ships1, Expr::val(dto.ships1).into())
        .col_expr(games::Column::Ships2, Expr::val(dto.ships2).into())
        .col_expr(games::Column::Board1Cells, Expr::val(dto.board1_cells).into())
        .col_expr(games::Column::Board2Cells, Expr::val(dto.board2_cells).into())
        .col_expr(games::Column::Status, Expr::val(dto.status).into())
        .col_expr(games::Column::Turn, Expr::val(dto.turn).into())
        .col_expr(games::Column::WinnerId, Expr::val(dto.winner_id).into())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        );

    if let Some(started_at) = dto.started_at {
        update = update.col_expr(games::Column::StartedAt, Expr::val(started_at).into());
    }
    if let Some(ended_at) = dto.ended_at {
        update = update.col_expr(games::Column::EndedAt, Expr::val(ended_at).into());
    }

    let result = update
        .filter(games::Column::Id.eq(dto.id))
        .filter(games::Column::LockVersion.eq(dto.expected_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        // Either the game doesn't exist or the lock version doesn't match.
        let game = find_by_id(conn, dto.id).await?;
        if let Some(game) = game {
            let payload = format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                dto.expected_lock_version, game.lock_version
            );
            return Err(sea_orm::DbErr::Custom(payload));
        }
        return Err(sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{}", dto.id)));
    }

    require_game(conn, dto.id).await
}
