use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::error::PortalError;
use crate::models::common::ApiResponse;
use crate::models::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::services::catalog_service;

// GET /admin/teams
pub async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::list_teams(&pool).await?))
}

// POST /admin/teams
#[tracing::instrument(name = "Admin create team", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn create_team(
    pool: web::Data<PgPool>,
    body: web::Json<CreateTeamRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let team = catalog_service::create_team(&mut *tx, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(team))
}

// PUT /admin/teams/{id}
#[tracing::instrument(name = "Admin update team", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn update_team(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    body: web::Json<UpdateTeamRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let team = catalog_service::update_team(&mut *tx, &path, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(team))
}

// DELETE /admin/teams/{id}
#[tracing::instrument(name = "Admin delete team", skip(pool, claims), fields(admin = %claims.username))]
pub async fn delete_team(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    catalog_service::delete_team(&mut *tx, &path).await?;
    tx.commit().await?;

    tracing::info!("Team {} deleted", path.as_str());
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Team deleted successfully")))
}
