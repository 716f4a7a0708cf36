//! Pricing configuration

use rust_decimal::Decimal;
use serde::Deserialize;

/// Tunable constants for the quote calculator.
///
/// Defaults are the canonical ruleset; every knob is kept configurable because
/// earlier iterations of the plan builder shipped with different floors,
/// surplus bands and eligibility thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Minimum final price; chosen even so the floor cannot break the
    /// even-final-digit rule.
    pub floor: i64,

    /// Lower bound of the budget-accommodation surplus factor.
    pub surplus_min: Decimal,

    /// Upper bound of the budget-accommodation surplus factor.
    pub surplus_max: Decimal,

    /// Multiplier applied by the new-client promotion.
    pub promo_rate: Decimal,

    /// Selected flagship services required before the promotion unlocks.
    pub flagship_minimum: usize,

    /// Advisory upper bound for the budget slider.
    pub budget_cap: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            floor: 50,
            surplus_min: Decimal::new(110, 2),
            surplus_max: Decimal::new(150, 2),
            promo_rate: Decimal::new(80, 2),
            flagship_minimum: 2,
            budget_cap: 800,
        }
    }
}
