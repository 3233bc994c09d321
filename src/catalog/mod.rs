pub mod seed;

use crate::discovery::{filter_providers, FilterCriteria};
use crate::models::{Property, Provider, ServiceCategory};
use tracing::debug;

/// In-memory catalog of categories, providers and rental properties.
///
/// Provider edits never mutate in place: `update_provider` and
/// `delete_provider` return a new catalog, so a caller holding the previous
/// value can compare the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<ServiceCategory>,
    providers: Vec<Provider>,
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(
        categories: Vec<ServiceCategory>,
        providers: Vec<Provider>,
        properties: Vec<Property>,
    ) -> Self {
        Self {
            categories,
            providers,
            properties,
        }
    }

    /// Catalog populated with the built-in mock listings
    pub fn seeded() -> Self {
        let categories = seed::categories();
        let providers = seed::providers(&categories);
        Self::new(categories, providers, seed::properties())
    }

    pub fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn category(&self, id: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn provider(&self, id: u32) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn property(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Providers listed under `category_id` that pass `criteria`
    pub fn filtered_providers(&self, category_id: &str, criteria: &FilterCriteria) -> Vec<Provider> {
        filter_providers(&self.providers, category_id, criteria)
    }

    /// Properties highlighted on the customer landing screen
    pub fn featured_properties(&self) -> &[Property] {
        let end = self.properties.len().min(2);
        &self.properties[..end]
    }

    /// Replace the provider sharing `updated.id`, keeping list order.
    /// An unknown id yields an unchanged copy.
    pub fn update_provider(&self, updated: Provider) -> Self {
        let providers = self
            .providers
            .iter()
            .map(|p| {
                if p.id == updated.id {
                    updated.clone()
                } else {
                    p.clone()
                }
            })
            .collect();
        if self.provider(updated.id).is_some() {
            debug!("Replaced provider {}", updated.id);
        }
        Self {
            categories: self.categories.clone(),
            providers,
            properties: self.properties.clone(),
        }
    }

    /// Drop the provider with `id`. An unknown id yields an unchanged copy.
    pub fn delete_provider(&self, id: u32) -> Self {
        let providers = self
            .providers
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        if self.provider(id).is_some() {
            debug!("Removed provider {}", id);
        }
        Self {
            categories: self.categories.clone(),
            providers,
            properties: self.properties.clone(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
