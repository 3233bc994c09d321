use crate::models::{Availability, Provider};
use serde::{Deserialize, Serialize};

/// Hourly rate bucket offered by the filter panel
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    Any,
    #[serde(rename = "under50")]
    Under50,
    #[serde(rename = "50to100")]
    From50To100,
    #[serde(rename = "over100")]
    Over100,
}

impl PriceRange {
    pub fn contains(&self, price: u32) -> bool {
        match self {
            PriceRange::Any => true,
            PriceRange::Under50 => price < 50,
            PriceRange::From50To100 => (50..=100).contains(&price),
            PriceRange::Over100 => price > 100,
        }
    }
}

/// Optional constraints applied on top of the category match.
/// `None` / `PriceRange::Any` means "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub min_rating: Option<f64>,
    pub price_range: PriceRange,
    pub max_distance: Option<f64>,
    pub availability: Option<Availability>,
}

impl FilterCriteria {
    /// Whether any constraint beyond the category is set
    pub fn is_active(&self) -> bool {
        self.min_rating.is_some_and(|r| r > 0.0)
            || self.price_range != PriceRange::Any
            || self.max_distance.is_some()
            || self.availability.is_some()
    }

    pub fn matches(&self, provider: &Provider) -> bool {
        if let Some(min) = self.min_rating {
            if provider.rating < min {
                return false;
            }
        }
        if !self.price_range.contains(provider.price_value) {
            return false;
        }
        if let Some(max) = self.max_distance {
            if provider.distance_value > max {
                return false;
            }
        }
        if let Some(wanted) = self.availability {
            if provider.availability != wanted {
                return false;
            }
        }
        true
    }
}

/// Providers listed under `category_id` that satisfy every criterion,
/// in their original relative order.
pub fn filter_providers(
    providers: &[Provider],
    category_id: &str,
    criteria: &FilterCriteria,
) -> Vec<Provider> {
    providers
        .iter()
        .filter(|p| p.category == category_id && criteria.matches(p))
        .cloned()
        .collect()
}
