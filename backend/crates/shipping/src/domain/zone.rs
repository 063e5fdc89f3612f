//! Shipping Zone Value Object

use crate::error::ShippingError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Destination category. Determines the base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    Domestic,
    International,
    Express,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Domestic, Zone::International, Zone::Express];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Zone::Domestic => "Domestic",
            Zone::International => "International",
            Zone::Express => "Express",
        }
    }

    /// Flat fee for packages in the standard tier.
    pub const fn standard_rate(&self) -> f64 {
        match self {
            Zone::Domestic => 5.0,
            Zone::International => 20.0,
            Zone::Express => 30.0,
        }
    }
}

impl FromStr for Zone {
    type Err = ShippingError;

    /// Exact, case-sensitive match. Whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| ShippingError::InvalidZone(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
