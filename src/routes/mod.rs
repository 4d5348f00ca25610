use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod portal;
pub mod profile;
pub mod registration;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            .service(registration::register)
            .service(auth::login)
            // Token-only routes
            .service(
                web::resource("/profile")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(profile::get_profile))
            )
            .service(
                web::resource("/verify-admin")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(profile::verify_admin))
            )
            .configure(admin::init_admin_routes)
            .configure(portal::init_portal_routes)
    );
}
