use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::error::PortalError;
use crate::models::common::ApiResponse;
use crate::models::sport::{CreateSportRequest, UpdateSportRequest};
use crate::services::catalog_service;

pub async fn get_sports(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::list_sports(&pool).await?))
}

#[tracing::instrument(name = "Admin create sport", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn create_sport(
    pool: web::Data<PgPool>,
    body: web::Json<CreateSportRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let sport = catalog_service::create_sport(&mut *tx, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(sport))
}

#[tracing::instrument(name = "Admin update sport", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn update_sport(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    body: web::Json<UpdateSportRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let sport = catalog_service::update_sport(&mut *tx, &path, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(sport))
}

#[tracing::instrument(name = "Admin delete sport", skip(pool, claims), fields(admin = %claims.username))]
pub async fn delete_sport(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    catalog_service::delete_sport(&mut *tx, &path).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Sport deleted successfully")))
}
