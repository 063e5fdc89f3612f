//! Router assembly

use axum::Router;
use axum::http::{HeaderValue, Method, Uri, header};
use kernel::error::app_error::AppError;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use users::InMemoryUserRepository;

use crate::config::ApiConfig;

/// Build the full application with a fresh, empty user store.
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_store(config, InMemoryUserRepository::new())
}

pub fn build_app_with_store(config: &ApiConfig, store: InMemoryUserRepository) -> Router {
    let allowed_origins: Vec<HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    Router::new()
        .merge(users::users_router(store, config.users.clone()))
        .merge(shipping::shipping_router())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("no route for {}", uri.path()))
}
