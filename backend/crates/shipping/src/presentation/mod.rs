//! Presentation Layer
//!
//! HTTP shell around the fee calculator.

pub mod dto;
pub mod handlers;
pub mod router;
