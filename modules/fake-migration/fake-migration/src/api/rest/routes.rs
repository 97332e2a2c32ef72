use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router, middleware};
use tower_http::trace::TraceLayer;

use super::{auth, handlers};
use crate::config::AuthConfig;
use crate::domain::service::Service;

/// Build the HTTP surface: the authenticated profile endpoint and the
/// unauthenticated health check.
#[must_use]
pub fn register_routes(service: Arc<Service>, auth: &AuthConfig) -> Router {
    let secret = Arc::new(auth.secret.clone());

    let protected = Router::new()
        .route("/", get(handlers::get_profile))
        .route_layer(middleware::from_fn_with_state(secret, auth::require_auth));

    Router::new()
        .merge(protected)
        .route("/healthcheck", get(handlers::healthcheck))
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}
