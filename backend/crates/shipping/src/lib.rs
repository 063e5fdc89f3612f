//! Shipping Fee Backend Module
//!
//! Tiered shipping-fee calculator.
//!
//! - `domain/` - Zones, weights, tiers and the pure fee computation
//! - `presentation/` - Thin HTTP quote shell
//!
//! ## Pricing Model
//! - Weight must satisfy `0 < w <= 50` kg, zone must be an exact zone name
//! - Standard tier `(0, 10]` kg pays the zone's flat rate
//! - Heavy tier `(10, 50]` kg pays the flat rate plus a fixed heavy surcharge
//! - Insurance multiplies the base fee by 1.015

pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use domain::fee::{FeeQuote, calculate_fee, quote};
pub use domain::weight::{Tier, Weight};
pub use domain::zone::Zone;
pub use error::{ShippingError, ShippingResult};
pub use presentation::router::shipping_router;
