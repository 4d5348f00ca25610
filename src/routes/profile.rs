use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::error::PortalError;
use crate::handlers::profile_handler::{get_user_profile, verify_admin as verify_admin_flag};

pub async fn get_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    get_user_profile(pool, claims).await
}

pub async fn verify_admin(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    verify_admin_flag(pool, claims).await
}
