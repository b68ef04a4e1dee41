//! Game HTTP routes: create, list, fetch, join, attack, surrender.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::domain::board::{CellState, Ship};
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::games;
use crate::state::app_state::AppState;

/// Client-supplied ship placement: the ship list plus the redundant 10x10
/// cell-status grid. Geometry legality is the client's responsibility.
#[derive(Debug, Deserialize)]
pub struct ShipsLayout {
    pub ships: Vec<Ship>,
    #[serde(rename = "boardCells")]
    pub board_cells: Vec<Vec<CellState>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    #[serde(rename = "ships1Layout")]
    pub ships1_layout: ShipsLayout,
    #[serde(default, rename = "isVsAI")]
    pub vs_ai: bool,
}

#[derive(Debug, Deserialize)]
pub struct JoinGameRequest {
    #[serde(rename = "ships2Layout")]
    pub ships2_layout: ShipsLayout,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

/// Attack request body. The `hit` / `sunkShipName` / `allPlayerShipsSunk`
/// fields are still accepted for wire compatibility but are advisory and
/// ignored: the server computes the outcome from the stored ship geometry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackRequest {
    pub target_player_id: i64,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub hit: Option<bool>,
    #[serde(default)]
    pub sunk_ship_name: Option<String>,
    #[serde(default)]
    pub all_player_ships_sunk: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ListGamesQuery {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub status_filter: Option<String>,
}

async fn create_game(
    req: HttpRequest,
    user: CurrentUser,
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CreateGameRequest { ships1_layout, vs_ai } = body.into_inner();

    let view = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            Ok(games::create_game(
                txn,
                user.id,
                ships1_layout.ships,
                ships1_layout.board_cells,
                vs_ai,
            )
            .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(view))
}

async fn list_games(
    req: HttpRequest,
    viewer: Option<CurrentUser>,
    query: web::Query<ListGamesQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let viewer_id = viewer.map(|u| u.id);
    let query = query.into_inner();

    let views = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            Ok(games::list_games(
                txn,
                viewer_id,
                query.type_.as_deref(),
                query.status_filter.as_deref(),
            )
            .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(views))
}

async fn get_game(
    req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(games::get_game(txn, game_id.0).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

async fn join_game(
    req: HttpRequest,
    game_id: GameId,
    user: CurrentUser,
    body: ValidatedJson<JoinGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let JoinGameRequest { ships2_layout } = body.into_inner();

    let view = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            Ok(games::join_game(
                txn,
                game_id.0,
                user.id,
                ships2_layout.ships,
                ships2_layout.board_cells,
            )
            .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

async fn attack(
    req: HttpRequest,
    game_id: GameId,
    user: CurrentUser,
    body: ValidatedJson<AttackRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let attack_req = body.into_inner();
    let coordinates = attack_req.coordinates;

    let view = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            Ok(games::attack(
                txn,
                game_id.0,
                user.id,
                attack_req.target_player_id,
                coordinates.x,
                coordinates.y,
            )
            .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

async fn surrender(
    req: HttpRequest,
    game_id: GameId,
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(games::surrender(txn, game_id.0, user.id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_game))
            .route(web::get().to(list_games)),
    );
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{game_id}/join").route(web::put().to(join_game)));
    cfg.service(web::resource("/{game_id}/attack").route(web::post().to(attack)));
    cfg.service(web::resource("/{game_id}/surrender").route(web::put().to(surrender)));
}
