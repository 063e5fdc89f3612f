//! Package Weight Value Object

use crate::error::ShippingError;

/// Heaviest package accepted, in kilograms (inclusive)
pub const MAX_WEIGHT_KG: f64 = 50.0;

/// Upper bound of the standard tier, in kilograms (inclusive)
pub const STANDARD_TIER_MAX_KG: f64 = 10.0;

/// Pricing tier selected by weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    /// `(0, 10]` kg
    Standard,
    /// `(10, 50]` kg
    Heavy,
}

/// Validated package weight in kilograms.
///
/// # Invariants
/// - finite
/// - `0 < kg <= MAX_WEIGHT_KG`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn new(kg: f64) -> Result<Self, ShippingError> {
        if kg.is_finite() && kg > 0.0 && kg <= MAX_WEIGHT_KG {
            Ok(Self(kg))
        } else {
            Err(ShippingError::InvalidWeight(kg))
        }
    }

    #[inline]
    pub fn kg(&self) -> f64 {
        self.0
    }

    pub fn tier(&self) -> Tier {
        if self.0 <= STANDARD_TIER_MAX_KG {
            Tier::Standard
        } else {
            Tier::Heavy
        }
    }
}
