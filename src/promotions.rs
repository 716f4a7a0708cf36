//! Promotion eligibility

use crate::{config::PricingConfig, selection::SelectionSet};

/// Whether the selection qualifies for the new-client promotion.
///
/// The promotion is reserved for larger engagements: at least
/// [`PricingConfig::flagship_minimum`] flagship services must be selected.
pub fn promotion_eligible(selection: &SelectionSet<'_>, config: &PricingConfig) -> bool {
    selection.flagship_count() >= config.flagship_minimum
}

/// The promotion value the calculator actually uses.
///
/// Eligibility always overrides the stored flag: a request made while
/// ineligible stays inert until the selection qualifies again.
pub fn effective_promotion(
    selection: &SelectionSet<'_>,
    requested: bool,
    config: &PricingConfig,
) -> bool {
    requested && promotion_eligible(selection, config)
}
