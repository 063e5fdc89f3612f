//! Fee Computation
//!
//! `calculate_fee` is deterministic and side-effect free; calling it
//! concurrently needs no synchronisation.

use crate::domain::weight::{Tier, Weight};
use crate::domain::zone::Zone;
use crate::error::ShippingResult;
use serde::Serialize;

/// Fixed surcharge added to the zone rate for heavy-tier packages
pub const HEAVY_SURCHARGE: f64 = 7.5;

/// Multiplier applied to the base fee when insured (1.5% surcharge)
pub const INSURANCE_MULTIPLIER: f64 = 1.015;

/// Priced shipment with its breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    pub weight_kg: f64,
    pub zone: Zone,
    pub tier: Tier,
    pub insured: bool,
    /// Tiered fee before insurance
    pub base_fee: f64,
    /// `total_fee - base_fee`
    pub insurance_fee: f64,
    pub total_fee: f64,
}

impl FeeQuote {
    /// Price an already-validated shipment.
    pub fn compute(weight: Weight, zone: Zone, insured: bool) -> Self {
        let tier = weight.tier();
        let base_fee = base_fee(zone, tier);
        let total_fee = if insured {
            base_fee * INSURANCE_MULTIPLIER
        } else {
            base_fee
        };

        Self {
            weight_kg: weight.kg(),
            zone,
            tier,
            insured,
            base_fee,
            insurance_fee: total_fee - base_fee,
            total_fee,
        }
    }
}

/// Tiered fee for a zone, before insurance.
pub fn base_fee(zone: Zone, tier: Tier) -> f64 {
    match tier {
        Tier::Standard => zone.standard_rate(),
        Tier::Heavy => zone.standard_rate() + HEAVY_SURCHARGE,
    }
}

/// Validate inputs and price the shipment.
///
/// Weight is checked before zone, so a call failing both reports the weight.
pub fn quote(weight_kg: f64, zone: &str, insured: bool) -> ShippingResult<FeeQuote> {
    let weight = Weight::new(weight_kg)?;
    let zone = zone.parse::<Zone>()?;
    Ok(FeeQuote::compute(weight, zone, insured))
}

/// Shipping fee for `weight_kg` kilograms to `zone`.
///
/// ```
/// use shipping::calculate_fee;
///
/// assert_eq!(calculate_fee(5.0, "Domestic", false).unwrap(), 5.0);
/// assert!((calculate_fee(5.0, "Domestic", true).unwrap() - 5.075).abs() < 1e-9);
///
/// let err = calculate_fee(60.0, "Express", false).unwrap_err();
/// assert!(err.to_string().contains("invalid weight"));
///
/// let err = calculate_fee(10.0, "Local", false).unwrap_err();
/// assert!(err.to_string().contains("invalid zone"));
/// ```
pub fn calculate_fee(weight_kg: f64, zone: &str, insured: bool) -> ShippingResult<f64> {
    quote(weight_kg, zone, insured).map(|q| q.total_fee)
}
