use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Game lifecycle status as stored in the `status` column.
///
/// The string values are the exact strings that appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameStatus {
    #[sea_orm(string_value = "Open")]
    Open,
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "player1_id")]
    pub player1_id: i64,
    #[sea_orm(column_name = "player2_id")]
    pub player2_id: Option<i64>,
    #[sea_orm(column_name = "vs_ai")]
    pub vs_ai: bool,
    /// JSON array of player 1's ships.
    pub ships1: Json,
    /// JSON array of player 2's ships (empty while the game is Open).
    pub ships2: Json,
    /// JSON 10x10 grid of cell statuses for player 1's board.
    #[sea_orm(column_name = "board1_cells")]
    pub board1_cells: Json,
    /// JSON 10x10 grid of cell statuses for player 2's board.
    #[sea_orm(column_name = "board2_cells")]
    pub board2_cells: Json,
    pub status: GameStatus,
    pub turn: Option<i64>,
    #[sea_orm(column_name = "winner_id")]
    pub winner_id: Option<i64>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "started_at")]
    pub started_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "ended_at")]
    pub ended_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Player1Id",
        to = "super::users::Column::Id"
    )]
    Player1,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player1.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
