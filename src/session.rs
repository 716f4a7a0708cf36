//! Plan builder session

use crate::{
    budget::BudgetInput,
    catalogue::Catalogue,
    config::PricingConfig,
    pricing::compute_quote,
    promotions::promotion_eligible,
    quote::Quote,
    selection::SelectionSet,
    surplus::{RandomSurplus, SurplusSource},
};

/// One visitor's interactive plan-builder session.
///
/// Owns the mutable selection, budget and promotion-request state, and hands
/// immutable [`Quote`] snapshots to callers. All mutation is synchronous and
/// single-owner; nothing here is shared across sessions.
#[derive(Debug)]
pub struct PlanBuilder<'a> {
    selection: SelectionSet<'a>,
    budget: BudgetInput,
    promo_requested: bool,
    surplus: Box<dyn SurplusSource + 'a>,
    config: PricingConfig,
}

impl<'a> PlanBuilder<'a> {
    /// Start an empty session over the given catalogue.
    pub fn new(catalogue: &'a Catalogue, config: PricingConfig) -> Self {
        let surplus = Box::new(RandomSurplus::new(config.surplus_min, config.surplus_max));

        PlanBuilder {
            selection: SelectionSet::new(catalogue),
            budget: BudgetInput::new(),
            promo_requested: false,
            surplus,
            config,
        }
    }

    /// Start an empty session with an explicit surplus source.
    pub fn with_surplus(
        catalogue: &'a Catalogue,
        config: PricingConfig,
        surplus: Box<dyn SurplusSource + 'a>,
    ) -> Self {
        PlanBuilder {
            selection: SelectionSet::new(catalogue),
            budget: BudgetInput::new(),
            promo_requested: false,
            surplus,
            config,
        }
    }

    /// Flip a service on or off. Unknown ids are ignored.
    pub fn toggle_service(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Whether a service is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Number of selected services.
    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    /// Store the visitor's raw budget input; nonsense resolves to zero.
    pub fn set_budget(&mut self, raw: &str) {
        self.budget.set(raw);
    }

    /// The stored budget.
    pub fn budget(&self) -> i64 {
        self.budget.current()
    }

    /// Record whether the visitor asked for the new-client promotion.
    ///
    /// The stored flag is inert while the selection is ineligible.
    pub fn set_promo(&mut self, requested: bool) {
        self.promo_requested = requested;
    }

    /// Whether the current selection qualifies for the promotion.
    pub fn promo_eligible(&self) -> bool {
        promotion_eligible(&self.selection, &self.config)
    }

    /// The UI gate for the compute action: at least one service selected.
    pub fn can_compute(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Compute a quote snapshot from the current state.
    pub fn compute(&mut self) -> Quote {
        compute_quote(
            &self.selection,
            self.budget.current(),
            self.promo_requested,
            self.surplus.as_mut(),
            &self.config,
        )
    }

    /// Discard all session state, as when the builder is closed.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.budget = BudgetInput::new();
        self.promo_requested = false;
    }
}
