//! API DTOs (Data Transfer Objects)

use crate::domain::fee::{FeeQuote, base_fee};
use crate::domain::weight::Tier;
use crate::domain::zone::Zone;
use serde::{Deserialize, Serialize};

/// Request for POST /shipping/quote
///
/// `zone` stays a raw string so an unknown zone is reported as
/// "invalid zone" rather than a JSON error.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub weight: f64,
    pub zone: String,
    #[serde(default)]
    pub insured: bool,
}

/// Response for POST /shipping/quote
pub type QuoteResponse = FeeQuote;

/// One entry of GET /shipping/zones
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRateResponse {
    pub zone: Zone,
    pub standard_fee: f64,
    pub heavy_fee: f64,
}

impl From<Zone> for ZoneRateResponse {
    fn from(zone: Zone) -> Self {
        Self {
            zone,
            standard_fee: base_fee(zone, Tier::Standard),
            heavy_fee: base_fee(zone, Tier::Heavy),
        }
    }
}
