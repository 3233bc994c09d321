pub mod booking;

use serde::{Deserialize, Serialize};

pub use booking::{BookingRequest, ConfirmationData, DetailRow, PropertyBookingRequest};

/// Broad grouping used to lay out the category grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGroup {
    Home,
    Tech,
    Creative,
    Professional,
    Transport,
    Personal,
    Food,
    Security,
    Outdoor,
    Event,
}

/// A kind of service a provider can be listed under
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub group: CategoryGroup,
}

/// When a provider can take on new work
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Now,
    Today,
    Tomorrow,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Now => "now",
            Availability::Today => "today",
            Availability::Tomorrow => "tomorrow",
        }
    }
}

/// A past project shown on a provider profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub photo_id: String,
    pub title: String,
    pub description: String,
}

/// A service professional listed in the directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: u32,
    pub name: String,
    pub rating: f64,
    pub reviews: u32,
    /// Display label, e.g. "2.4 miles"
    pub distance: String,
    pub distance_value: f64,
    /// Hourly rate in whole dollars
    pub price_value: u32,
    pub experience: String,
    pub specialties: Vec<String>,
    pub availability: Availability,
    pub photo_id: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    pub bio: String,
    pub certifications: Vec<String>,
    pub completed_jobs: u32,
    pub response_time: String,
    pub languages: Vec<String>,
    /// Id of the `ServiceCategory` this provider is listed under
    pub category: String,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
}

/// Short-term rental listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub price_per_night: u32,
    pub rating: f64,
    pub reviews: u32,
    pub photo_id: String,
    pub description: String,
    pub host_name: String,
    pub host_phone: String,
    pub amenities: Vec<String>,
}
