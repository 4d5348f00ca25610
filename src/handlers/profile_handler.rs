use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::access_gate::require_admin;
use crate::auth::jwt::Claims;
use crate::db::users;
use crate::error::PortalError;
use crate::models::auth::VerifyAdminResponse;

#[tracing::instrument(
    name = "Get user profile",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_user_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    // A valid token can outlive its account.
    let user_id = claims
        .user_id()
        .ok_or_else(|| PortalError::not_found("User not found"))?;
    let user = users::find_by_id(pool.get_ref(), user_id)
        .await?
        .ok_or_else(|| PortalError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(user))
}

#[tracing::instrument(
    name = "Verify admin",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn verify_admin(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let is_admin = require_admin(pool.get_ref(), claims.user_id()).await;
    HttpResponse::Ok().json(VerifyAdminResponse { is_admin })
}
