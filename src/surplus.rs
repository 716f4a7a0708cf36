//! Surplus factor sources

use std::fmt;

use rand::Rng;
use rust_decimal::{Decimal, prelude::FromPrimitive};

/// Source of the budget-accommodation surplus factor.
///
/// The calculator multiplies an over-budget customer's stated budget by this
/// factor. Keeping the draw behind a trait keeps [`crate::pricing::compute_quote`]
/// deterministic under test; the calculator clamps whatever comes back into the
/// configured band, so a source cannot push a price outside it.
pub trait SurplusSource: fmt::Debug {
    /// Draw the next surplus factor, e.g. `1.20` for a 20% markup.
    fn surplus_factor(&mut self) -> Decimal;
}

/// Uniform random surplus factor over an inclusive band.
#[derive(Debug, Clone)]
pub struct RandomSurplus {
    min: Decimal,
    max: Decimal,
}

impl RandomSurplus {
    /// Create a source drawing uniformly from `[min, max]`.
    pub fn new(min: Decimal, max: Decimal) -> Self {
        RandomSurplus { min, max }
    }
}

impl SurplusSource for RandomSurplus {
    fn surplus_factor(&mut self) -> Decimal {
        let unit = rand::thread_rng().gen_range(0.0f64..=1.0);
        let unit = Decimal::from_f64(unit).unwrap_or_default();

        self.min + (self.max - self.min) * unit
    }
}

/// Constant surplus factor, for deterministic tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedSurplus {
    factor: Decimal,
}

impl FixedSurplus {
    /// Create a source that always returns `factor`.
    pub fn new(factor: Decimal) -> Self {
        FixedSurplus { factor }
    }
}

impl SurplusSource for FixedSurplus {
    fn surplus_factor(&mut self) -> Decimal {
        self.factor
    }
}
