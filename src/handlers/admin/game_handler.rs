use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::error::PortalError;
use crate::models::common::ApiResponse;
use crate::models::game::{CreateGameRequest, UpdateGameRequest};
use crate::services::game_service;

// GET /admin/games - Most recent first
pub async fn get_games(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(game_service::list_games_latest_first(&pool).await?))
}

// POST /admin/games
#[tracing::instrument(name = "Admin create game", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn create_game(
    pool: web::Data<PgPool>,
    body: web::Json<CreateGameRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let game = game_service::create_game(&mut *tx, &body).await?;
    tx.commit().await?;

    tracing::info!("Game {} scheduled", game.id);
    Ok(HttpResponse::Created().json(game))
}

// PUT /admin/games/{id}
#[tracing::instrument(name = "Admin update game", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn update_game(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    body: web::Json<UpdateGameRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let game = game_service::update_game(&mut *tx, &path, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(game))
}

// DELETE /admin/games/{id}
#[tracing::instrument(name = "Admin delete game", skip(pool, claims), fields(admin = %claims.username))]
pub async fn delete_game(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    game_service::delete_game(&mut *tx, &path).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Game deleted successfully")))
}
