use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::PortalError;
use crate::models::user::RegistrationRequest;
use crate::services::account_service::{create_account, NewAccount};

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(user = %user_form)
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, PortalError> {
    let mut tx = pool.begin().await?;
    let user = create_account(
        &mut *tx,
        NewAccount {
            username: user_form.username.as_deref(),
            email: user_form.email.as_deref(),
            password: user_form.password.as_ref(),
            is_admin: false,
        },
    )
    .await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(user))
}
