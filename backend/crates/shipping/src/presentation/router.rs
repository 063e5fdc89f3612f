//! Shipping Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::handlers;

/// Create the shipping router. Stateless.
pub fn shipping_router() -> Router {
    Router::new()
        .route("/shipping/quote", post(handlers::create_quote))
        .route("/shipping/zones", get(handlers::list_zones))
}
