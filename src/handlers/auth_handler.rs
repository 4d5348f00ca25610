use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::error::PortalError;
use crate::models::auth::LoginRequest;
use crate::services::account_service;

pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, PortalError> {
    let response = account_service::login(&pool, &login_form, &jwt_settings).await?;
    Ok(HttpResponse::Ok().json(response))
}
