//! Quotient prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    booking::{BookingRequest, DeliveryError, QuoteDelivery, SubmissionLog, submit},
    budget::BudgetInput,
    catalogue::{Catalogue, CatalogueError, ServiceItem, Tier},
    config::PricingConfig,
    delivery::{DeliveryConfig, HttpQuoteDelivery},
    fixtures::{FixtureError, agency_catalogue, load_catalogue},
    pricing::{base_total, compute_quote},
    promotions::{effective_promotion, promotion_eligible},
    quote::Quote,
    selection::SelectionSet,
    session::PlanBuilder,
    surplus::{FixedSurplus, RandomSurplus, SurplusSource},
};
