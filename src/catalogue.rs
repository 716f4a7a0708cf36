//! Service catalogue

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

/// Errors related to catalogue construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// Two catalogue entries share the same id.
    #[error("duplicate service id: {0}")]
    DuplicateId(String),

    /// A catalogue entry has a cost of zero; costs must be positive.
    #[error("service {0} has a zero cost")]
    ZeroCost(String),
}

/// Pricing tier of a catalogue service.
///
/// Flagship services gate the new-client promotion; everything else is standard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Highest-cost flagship offering.
    Flagship,

    /// Ordinary line item.
    #[default]
    Standard,
}

/// A single priced service offering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceItem {
    /// Unique identifier within the catalogue.
    pub id: String,

    /// Human-readable name, used in quote summaries and the email handoff.
    pub label: String,

    /// Monthly price contribution in whole currency units.
    pub cost: u32,

    /// Pricing tier.
    #[serde(default)]
    pub tier: Tier,
}

/// The static set of offered services.
///
/// Iteration follows declaration order, so summaries and selected-label lists are
/// reproducible regardless of the order services were toggled in.
#[derive(Debug, Clone)]
pub struct Catalogue {
    items: Vec<ServiceItem>,
    index: FxHashMap<String, usize>,
}

impl Catalogue {
    /// Build a catalogue from service entries, keeping their declaration order.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::DuplicateId`]: two entries share an id.
    /// - [`CatalogueError::ZeroCost`]: an entry has a cost of zero.
    pub fn new(items: impl Into<Vec<ServiceItem>>) -> Result<Self, CatalogueError> {
        let items = items.into();
        let mut index = FxHashMap::default();

        for (position, item) in items.iter().enumerate() {
            if item.cost == 0 {
                return Err(CatalogueError::ZeroCost(item.id.clone()));
            }

            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogueError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Catalogue { items, index })
    }

    /// Look up a service by id.
    pub fn get(&self, id: &str) -> Option<&ServiceItem> {
        self.index.get(id).and_then(|position| self.items.get(*position))
    }

    /// Whether the catalogue offers a service with the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over all services in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceItem> {
        self.items.iter()
    }

    /// Number of services offered.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a ServiceItem;
    type IntoIter = std::slice::Iter<'a, ServiceItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
