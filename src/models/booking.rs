use serde::{Deserialize, Serialize};

/// Booking form submission for a service provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub provider_id: u32,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: String,
    pub time: String,
    pub description: String,
}

/// Booking form submission for a rental property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBookingRequest {
    pub property_id: u32,
    pub customer_name: String,
    pub customer_phone: String,
    /// Arrival date, `YYYY-MM-DD`
    pub check_in: String,
    /// Departure date, `YYYY-MM-DD`
    pub check_out: String,
    pub guests: u8,
}

/// One labelled line in a confirmation summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Reviewable summary of a booking, shown before handing off to the
/// messaging channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationData {
    pub title: String,
    pub subtitle: String,
    pub details: Vec<DetailRow>,
    pub outbound_link: String,
    pub points_earned: u64,
}
