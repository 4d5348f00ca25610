use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::error::PortalError;
use crate::models::common::ApiResponse;
use crate::models::user::{CreateUserRequest, UpdateUserRequest};
use crate::services::account_service::{self, NewAccount};

// GET /admin/users
pub async fn get_users(pool: web::Data<PgPool>) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(account_service::list_users(&pool).await?))
}

// GET /admin/users/{id}
pub async fn get_user_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, PortalError> {
    Ok(HttpResponse::Ok().json(account_service::get_user(&pool, &path).await?))
}

// POST /admin/users
#[tracing::instrument(name = "Admin create user", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn create_user(
    pool: web::Data<PgPool>,
    body: web::Json<CreateUserRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let user = account_service::create_account(
        &mut *tx,
        NewAccount {
            username: body.username.as_deref(),
            email: body.email.as_deref(),
            password: body.password.as_ref(),
            is_admin: body.is_admin,
        },
    )
    .await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(user))
}

// PUT /admin/users/{id}
#[tracing::instrument(name = "Admin update user", skip(pool, body, claims), fields(admin = %claims.username))]
pub async fn update_user(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let user = account_service::update_user(&mut *tx, &path, &body).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(user))
}

// DELETE /admin/users/{id}
#[tracing::instrument(name = "Admin delete user", skip(pool, claims), fields(admin = %claims.username))]
pub async fn delete_user(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    account_service::delete_user(&mut *tx, &path).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("User deleted successfully")))
}
