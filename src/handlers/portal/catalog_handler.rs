use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::PortalError;
use crate::services::catalog_service;

pub async fn list_news(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::list_news(&pool).await?))
}

pub async fn get_news(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::get_news(&pool, &path).await?))
}

pub async fn list_sports(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::list_sports(&pool).await?))
}

pub async fn get_sport(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::get_sport(&pool, &path).await?))
}

pub async fn list_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::list_teams(&pool).await?))
}

pub async fn get_team(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(catalog_service::get_team(&pool, &path).await?))
}
