use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::error::PortalError;
use crate::models::common::ApiResponse;
use crate::models::news::{CreateNewsRequest, UpdateNewsRequest};
use crate::services::catalog_service;

pub async fn get_news(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::list_news(&pool).await?))
}

#[tracing::instrument(name = "Admin create news", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn create_news(
    pool: web::Data<PgPool>,
    body: web::Json<CreateNewsRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let article = catalog_service::create_news(&mut *tx, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(article))
}

#[tracing::instrument(name = "Admin update news", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn update_news(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    body: web::Json<UpdateNewsRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let article = catalog_service::update_news(&mut *tx, &path, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(article))
}

#[tracing::instrument(name = "Admin delete news", skip(pool, claims), fields(admin = %claims.username))]
pub async fn delete_news(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    catalog_service::delete_news(&mut *tx, &path).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("News deleted successfully")))
}
