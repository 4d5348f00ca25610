use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::PortalError;
use crate::models::medal::MedalStandingView;
use crate::services::medal_service;

pub async fn list_standings(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(medal_service::list_standings(&pool).await?))
}

pub async fn get_team_standing(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, PortalError> {
    let standing = medal_service::get_standing(&pool, &path).await?;
    Ok(HttpResponse::Ok().json(MedalStandingView::from(standing)))
}
