//! Quote calculation

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::ToPrimitive,
};

use crate::{
    config::PricingConfig,
    promotions::effective_promotion,
    quote::Quote,
    selection::SelectionSet,
    surplus::SurplusSource,
};

/// Sum of the selected services' catalogue costs.
pub fn base_total(selection: &SelectionSet<'_>) -> i64 {
    selection
        .selected_items()
        .map(|item| i64::from(item.cost))
        .sum()
}

/// Compute a quote for the given selection, budget and promotion request.
///
/// Total over its whole input domain: an empty selection prices at the floor,
/// and a zero, negative or nonsense budget reads as "no budget constraint".
/// The surplus source is the only ambient effect; a fixed source makes the
/// result fully deterministic.
pub fn compute_quote(
    selection: &SelectionSet<'_>,
    budget: i64,
    promo_requested: bool,
    surplus: &mut dyn SurplusSource,
    config: &PricingConfig,
) -> Quote {
    let base = base_total(selection);
    let mut price = base;

    // A positive budget below the selection total gets an accommodation offer:
    // the stated budget marked up by a bounded surplus factor.
    let accommodated = budget > 0 && budget < base;
    if accommodated {
        let factor = surplus
            .surplus_factor()
            .clamp(config.surplus_min, config.surplus_max);

        price = round_currency(Decimal::from(budget) * factor);
    }

    // The promotion composes on the accommodated price, not the raw total.
    let discounted = effective_promotion(selection, promo_requested, config);
    if discounted {
        price = round_currency(Decimal::from(price) * config.promo_rate);
    }

    price = even_final_digit(price);

    let floored = price < config.floor;
    if floored {
        // The default floor is even, but a configured one may not be.
        price = even_final_digit(config.floor);
    }

    let message = compose_message(budget, accommodated, discounted, floored);

    Quote::new(base, price, discounted, message, selection.selected_labels())
}

/// Round to the nearest whole currency unit, midpoints away from zero.
fn round_currency(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        // Saturate unrepresentable amounts to the largest even price.
        .unwrap_or(i64::MAX - 1)
}

/// Quoted prices always end in an even digit; odd endings are bumped up by one.
fn even_final_digit(price: i64) -> i64 {
    if price.rem_euclid(10) % 2 == 1 {
        price.saturating_add(1)
    } else {
        price
    }
}

fn compose_message(budget: i64, accommodated: bool, discounted: bool, floored: bool) -> String {
    let mut message = if accommodated {
        format!("Tailored toward your ${budget}/mo budget")
    } else {
        String::from("Standard rate for the selected services")
    };

    if discounted {
        message.push_str(", with the new-client promotion applied");
    }

    if floored {
        message.push_str(", priced at our minimum engagement");
    }

    message
}
