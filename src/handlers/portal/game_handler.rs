use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::PortalError;
use crate::services::game_service;

/// Schedule view: soonest first, with team and sport names attached.
pub async fn list_games(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(game_service::list_games(&pool).await?))
}

pub async fn get_game(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(game_service::get_game(&pool, &path).await?))
}

pub async fn list_games_by_sport(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(game_service::list_games_by_sport(&pool, &path).await?))
}
