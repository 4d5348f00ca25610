use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::error::PortalError;
use crate::models::common::ApiResponse;
use crate::models::medal::{CreateStandingRequest, MedalStandingView, UpdateStandingRequest};
use crate::services::medal_service;

#[tracing::instrument(name = "Admin create medal standing", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn create_standing(
    pool: web::Data<PgPool>,
    body: web::Json<CreateStandingRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let standing = medal_service::create_standing(&mut *tx, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(MedalStandingView::from(standing)))
}

#[tracing::instrument(name = "Admin update medal standing", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn update_standing(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    body: web::Json<UpdateStandingRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let standing = medal_service::update_standing(&mut *tx, &path, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(MedalStandingView::from(standing)))
}

#[tracing::instrument(name = "Admin delete medal standing", skip(pool, claims), fields(admin = %claims.username))]
pub async fn delete_standing(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    medal_service::delete_standing(&mut *tx, &path).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Medal standing deleted successfully")))
}
