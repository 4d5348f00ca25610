use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use sqlx::PgPool;
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use crate::auth::access_gate::require_admin;
use crate::error::PortalError;
use crate::middleware::auth::validate_jwt_from_request;

/// Gate for every state-mutating route.
///
/// The token only proves identity; the admin flag is read from the user
/// record on each request, so demoting a user takes effect immediately.
pub struct AdminMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let claims = match validate_jwt_from_request(&req) {
            Ok(claims) => claims,
            Err(e) => return Box::pin(async move { Err(e.into()) }),
        };

        let pool = match req.app_data::<web::Data<PgPool>>() {
            Some(pool) => pool.clone(),
            None => {
                return Box::pin(async move {
                    Err(PortalError::Internal("Database pool not configured".into()).into())
                })
            }
        };

        Box::pin(async move {
            if !require_admin(pool.get_ref(), claims.user_id()).await {
                tracing::warn!("Non-admin user attempted admin access: {}", claims.username);
                return Err(PortalError::Authorization(
                    "Access denied. Administrators only.".into(),
                ).into());
            }

            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}
