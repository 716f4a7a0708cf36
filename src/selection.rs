//! Selection state

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::catalogue::{Catalogue, ServiceItem, Tier};

/// The set of services a visitor has toggled on in one builder session.
///
/// Membership only; holds ids borrowed from the catalogue rather than owned copies.
/// Toggling an id the catalogue does not offer is a silent no-op, since that can
/// only come from a caller bug, not user input.
#[derive(Debug, Clone)]
pub struct SelectionSet<'a> {
    catalogue: &'a Catalogue,
    chosen: FxHashSet<&'a str>,
}

impl<'a> SelectionSet<'a> {
    /// Create an empty selection over the given catalogue.
    pub fn new(catalogue: &'a Catalogue) -> Self {
        SelectionSet {
            catalogue,
            chosen: FxHashSet::default(),
        }
    }

    /// Flip membership of the given service id.
    pub fn toggle(&mut self, id: &str) {
        let catalogue = self.catalogue;
        let Some(item) = catalogue.get(id) else {
            return;
        };

        let key = item.id.as_str();
        if !self.chosen.remove(key) {
            self.chosen.insert(key);
        }
    }

    /// Whether the given service id is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.chosen.contains(id)
    }

    /// Number of selected services.
    pub fn count(&self) -> usize {
        self.chosen.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// The catalogue this selection draws from.
    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Iterate over the selected services in catalogue declaration order.
    pub fn selected_items(&self) -> impl Iterator<Item = &'a ServiceItem> + '_ {
        self.catalogue
            .iter()
            .filter(|item| self.chosen.contains(item.id.as_str()))
    }

    /// Labels of the selected services, in catalogue declaration order.
    pub fn selected_labels(&self) -> SmallVec<[String; 8]> {
        self.selected_items().map(|item| item.label.clone()).collect()
    }

    /// Number of selected flagship services.
    pub fn flagship_count(&self) -> usize {
        self.selected_items()
            .filter(|item| item.tier == Tier::Flagship)
            .count()
    }
}
