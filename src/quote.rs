//! Quote

use rusty_money::{Money, iso};
use smallvec::SmallVec;

/// The immutable result of one calculator invocation.
///
/// Produced fresh on every compute; a snapshot with no ties to the live
/// selection or budget state, so it can be handed to the booking flow while
/// the visitor keeps editing the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    base_total: i64,
    final_price: i64,
    discounted: bool,
    message: String,
    selected_labels: SmallVec<[String; 8]>,
}

impl Quote {
    /// Create a quote with the given details.
    pub fn new(
        base_total: i64,
        final_price: i64,
        discounted: bool,
        message: String,
        selected_labels: SmallVec<[String; 8]>,
    ) -> Self {
        Quote {
            base_total,
            final_price,
            discounted,
            message,
            selected_labels,
        }
    }

    /// Sum of the selected services' catalogue costs, before any adjustment.
    pub fn base_total(&self) -> i64 {
        self.base_total
    }

    /// The price after accommodation, promotion, rounding and the floor clamp.
    pub fn final_price(&self) -> i64 {
        self.final_price
    }

    /// Whether the new-client promotion fired.
    pub fn discounted(&self) -> bool {
        self.discounted
    }

    /// Short human-readable explanation of how the price was reached.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Labels of the quoted services, in catalogue declaration order.
    pub fn selected_labels(&self) -> &[String] {
        &self.selected_labels
    }

    /// The final price as a localized currency string, e.g. `$720.00`.
    pub fn formatted_price(&self) -> String {
        Money::from_major(self.final_price, iso::USD).to_string()
    }
}
