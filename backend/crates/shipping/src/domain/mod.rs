//! Domain Layer
//!
//! Pure pricing logic. No I/O, no shared state.

pub mod fee;
pub mod weight;
pub mod zone;
