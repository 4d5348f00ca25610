//! User accounts: registration, login and admin-side management.

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::auth::jwt::generate_token;
use crate::config::jwt::JwtSettings;
use crate::config::settings::BootstrapAdmin;
use crate::db::users;
use crate::error::{PortalError, PortalResult};
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::user::{UpdateUserRequest, User};
use crate::utils::ids::{non_blank, parse_id};
use crate::utils::password::{hash_password, verify_password};

const USER_NOT_FOUND: &str = "User not found";

/// Fields common to self-registration and admin-created accounts.
pub struct NewAccount<'a> {
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password: Option<&'a SecretString>,
    pub is_admin: bool,
}

#[tracing::instrument(name = "Create account", skip(conn, account), fields(username = ?account.username))]
pub async fn create_account(conn: &mut PgConnection, account: NewAccount<'_>) -> PortalResult<User> {
    let password = account
        .password
        .map(|p| p.expose_secret())
        .filter(|p| !p.is_empty());
    let (Some(username), Some(email), Some(password)) = (
        non_blank(account.username),
        non_blank(account.email),
        password,
    ) else {
        return Err(PortalError::validation("Username, email and password are required"));
    };

    if users::find_by_username(&mut *conn, username).await?.is_some() {
        return Err(PortalError::conflict("Username already exists"));
    }
    if users::find_by_email(&mut *conn, email).await?.is_some() {
        return Err(PortalError::conflict("Email already registered"));
    }

    let user = User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        password_hash: hash_password(password)?,
        is_admin: account.is_admin,
        created_at: Utc::now(),
    };
    users::insert(&mut *conn, &user).await?;

    tracing::info!("Created user {} (admin: {})", user.id, user.is_admin);
    Ok(user)
}

#[tracing::instrument(
    name = "Login user attempt",
    skip(pool, login_form, jwt_settings),
    fields(username = %login_form.username)
)]
pub async fn login(
    pool: &PgPool,
    login_form: &LoginRequest,
    jwt_settings: &JwtSettings,
) -> PortalResult<LoginResponse> {
    let invalid = || PortalError::Unauthenticated("Invalid username or password".into());

    let user = users::find_by_username(pool, &login_form.username)
        .await?
        .ok_or_else(|| {
            tracing::info!("User not found");
            invalid()
        })?;

    if !verify_password(login_form.password.expose_secret(), &user.password_hash) {
        tracing::info!("Invalid password");
        return Err(invalid());
    }

    let token = generate_token(user.id, &user.username, jwt_settings)
        .map_err(|e| PortalError::Internal(format!("Error generating JWT token: {:?}", e)))?;

    Ok(LoginResponse { token, user })
}

pub async fn list_users(pool: &PgPool) -> PortalResult<Vec<User>> {
    Ok(users::list(pool).await?)
}

pub async fn get_user(pool: &PgPool, user_id: &str) -> PortalResult<User> {
    let user_id = parse_id(user_id).ok_or_else(|| PortalError::not_found(USER_NOT_FOUND))?;
    users::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| PortalError::not_found(USER_NOT_FOUND))
}

#[tracing::instrument(name = "Update user", skip(conn, request))]
pub async fn update_user(
    conn: &mut PgConnection,
    user_id: &str,
    request: &UpdateUserRequest,
) -> PortalResult<User> {
    let user_id = parse_id(user_id).ok_or_else(|| PortalError::not_found(USER_NOT_FOUND))?;
    let mut user = users::find_by_id(&mut *conn, user_id)
        .await?
        .ok_or_else(|| PortalError::not_found(USER_NOT_FOUND))?;

    if let Some(username) = request.username.as_deref() {
        let username = non_blank(Some(username))
            .ok_or_else(|| PortalError::validation("Username cannot be empty"))?;
        if let Some(existing) = users::find_by_username(&mut *conn, username).await? {
            if existing.id != user.id {
                return Err(PortalError::conflict("Username already exists"));
            }
        }
        user.username = username.to_string();
    }
    if let Some(email) = request.email.as_deref() {
        let email = non_blank(Some(email))
            .ok_or_else(|| PortalError::validation("Email cannot be empty"))?;
        if let Some(existing) = users::find_by_email(&mut *conn, email).await? {
            if existing.id != user.id {
                return Err(PortalError::conflict("Email already registered"));
            }
        }
        user.email = email.to_string();
    }
    if let Some(password) = &request.password {
        if password.expose_secret().is_empty() {
            return Err(PortalError::validation("Password cannot be empty"));
        }
        user.password_hash = hash_password(password.expose_secret())?;
    }
    if let Some(is_admin) = request.is_admin {
        user.is_admin = is_admin;
    }

    users::update(&mut *conn, &user).await?;
    Ok(user)
}

#[tracing::instrument(name = "Delete user", skip(conn))]
pub async fn delete_user(conn: &mut PgConnection, user_id: &str) -> PortalResult<()> {
    let user_id = parse_id(user_id).ok_or_else(|| PortalError::not_found(USER_NOT_FOUND))?;
    if !users::delete(&mut *conn, user_id).await? {
        return Err(PortalError::not_found(USER_NOT_FOUND));
    }
    Ok(())
}

/// Make sure the configured bootstrap account exists and holds admin rights.
pub async fn ensure_bootstrap_admin(pool: &PgPool, admin: BootstrapAdmin<'_>) -> PortalResult<()> {
    let mut tx = pool.begin().await?;

    let existing = users::find_by_username(&mut *tx, admin.username).await?;
    match existing {
        Some(mut user) if !user.is_admin => {
            user.is_admin = true;
            users::update(&mut *tx, &user).await?;
            tracing::info!("Promoted bootstrap user {} to admin", user.username);
        }
        Some(_) => {}
        None => {
            create_account(
                &mut *tx,
                NewAccount {
                    username: Some(admin.username),
                    email: Some(admin.email),
                    password: Some(admin.password),
                    is_admin: true,
                },
            )
            .await?;
        }
    }

    tx.commit().await?;
    Ok(())
}
