//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;

use crate::domain::fee::quote;
use crate::domain::zone::Zone;
use crate::error::{ShippingError, ShippingResult};
use crate::presentation::dto::{QuoteRequest, QuoteResponse, ZoneRateResponse};

/// POST /shipping/quote
pub async fn create_quote(body: Bytes) -> ShippingResult<Json<QuoteResponse>> {
    let req: QuoteRequest = serde_json::from_slice(&body).map_err(ShippingError::from)?;

    let fee_quote = quote(req.weight, &req.zone, req.insured)?;

    tracing::info!(
        weight_kg = fee_quote.weight_kg,
        zone = %fee_quote.zone,
        insured = fee_quote.insured,
        total_fee = fee_quote.total_fee,
        "Quoted shipment"
    );

    Ok(Json(fee_quote))
}

/// GET /shipping/zones
pub async fn list_zones() -> Json<Vec<ZoneRateResponse>> {
    Json(Zone::ALL.into_iter().map(ZoneRateResponse::from).collect())
}
