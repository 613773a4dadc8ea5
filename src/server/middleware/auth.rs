//! Access control middleware
//!
//! Resolves the caller subject, looks the principal up through the store and
//! attaches an [`AuthContext`] to the request. Handlers enforce program scope.

use crate::auth::{Principal, resolve_subject};
use crate::server::AppState;
use crate::server::middleware::helpers::is_public_route;
use crate::storage::StoreErrorKind;
use crate::utils::error::GatewayError;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::body::EitherBody;
use actix_web::{HttpMessage, ResponseError, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, error, warn};

/// Caller identity attached to authenticated requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub principal: Principal,
    /// Subject the principal was resolved from; `None` when auth is disabled
    pub subject: Option<String>,
    /// Whether the subject came from the certificate header rather than the fallback
    pub from_certificate: bool,
}

/// Auth middleware for Actix-web
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        if is_public_route(req.path()) || req.method() == actix_web::http::Method::OPTIONS {
            return Box::pin(async move {
                service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body)
            });
        }

        Box::pin(async move {
            let context = match req.app_data::<web::Data<AppState>>().cloned() {
                Some(state) => authenticate(&req, &state).await,
                None => Err(GatewayError::internal("Application state not configured")),
            };

            match context {
                Ok(context) => {
                    debug!(
                        user = %context.principal.user_name,
                        path = req.path(),
                        "Request authenticated"
                    );
                    req.extensions_mut().insert(context);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    let response = e.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

async fn authenticate(
    req: &ServiceRequest,
    state: &AppState,
) -> Result<AuthContext, GatewayError> {
    let auth_config = state.config.auth();

    if !auth_config.enabled {
        return Ok(AuthContext {
            principal: Principal::unauthenticated_admin(),
            subject: None,
            from_certificate: false,
        });
    }

    let subject = resolve_subject(req.headers(), auth_config).ok_or_else(|| {
        warn!(path = req.path(), "Request without client certificate subject");
        GatewayError::unauthorized("Client certificate required")
    })?;
    let from_certificate = req
        .headers()
        .get(auth_config.subject_header.as_str())
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim() == subject);

    let principal = match state.store.find_principal(&subject).await {
        Ok(Some(principal)) => principal,
        Ok(None) => {
            warn!(subject = %subject, "Unknown or inactive certificate subject");
            return Err(GatewayError::unauthorized("User not found or not authorized"));
        }
        Err(e) if e.kind == StoreErrorKind::Unavailable => {
            error!("Principal lookup failed, store unavailable: {}", e);
            return Err(GatewayError::Store(e));
        }
        Err(e) => {
            error!("Principal lookup failed: {}", e);
            return Err(GatewayError::internal(format!("Authentication failed: {}", e)));
        }
    };

    Ok(AuthContext {
        principal,
        subject: Some(subject),
        from_certificate,
    })
}
