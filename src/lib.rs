//! Quotient
//!
//! Quotient is the pricing core of an agency "custom plan builder": a static service
//! catalogue, per-session selection and budget state, promotional gating, and a
//! deterministic quote calculator with an injectable randomness source.

pub mod booking;
pub mod budget;
pub mod catalogue;
pub mod config;
pub mod delivery;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod quote;
pub mod selection;
pub mod session;
pub mod surplus;
