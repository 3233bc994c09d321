use crate::booking::link::chat_link;
use crate::error::{HubError, Result};
use crate::models::{
    BookingRequest, ConfirmationData, DetailRow, Property, PropertyBookingRequest, Provider,
    ServiceCategory,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Points credited when a service booking is handed off
pub const SERVICE_BOOKING_POINTS: u64 = 25;
/// Points credited when a rental request is handed off
pub const STAY_BOOKING_POINTS: u64 = 50;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const DEFAULT_SERVICE_LABEL: &str = "Professional Service";

/// Turns booking form submissions into confirmation payloads.
///
/// Building is pure: nothing is credited or sent until the caller finalizes
/// the returned confirmation.
#[derive(Debug, Clone)]
pub struct IntentBuilder {
    messaging_base_url: String,
}

impl IntentBuilder {
    pub fn new(messaging_base_url: impl Into<String>) -> Self {
        Self {
            messaging_base_url: messaging_base_url.into(),
        }
    }

    /// Confirmation for a service booking.
    ///
    /// `category` is the category the customer was browsing, if any.
    pub fn service(
        &self,
        request: &BookingRequest,
        providers: &[Provider],
        category: Option<&ServiceCategory>,
    ) -> Result<ConfirmationData> {
        let provider = providers
            .iter()
            .find(|p| p.id == request.provider_id)
            .ok_or(HubError::ProviderNotFound(request.provider_id))?;

        let message = service_message(request);
        debug!("Built service request message for provider {}", provider.id);

        Ok(ConfirmationData {
            title: "Booking Request Ready!".to_string(),
            subtitle: format!("You're about to book {}", provider.name),
            details: vec![
                DetailRow::new(
                    "Service",
                    category.map_or(DEFAULT_SERVICE_LABEL, |c| c.title.as_str()),
                ),
                DetailRow::new("Professional", &provider.name),
                DetailRow::new("Date", &request.date),
                DetailRow::new("Time Slot", &request.time),
            ],
            outbound_link: chat_link(&self.messaging_base_url, &provider.phone, &message),
            points_earned: SERVICE_BOOKING_POINTS,
        })
    }

    /// Confirmation for a rental request, priced per night.
    pub fn property(
        &self,
        request: &PropertyBookingRequest,
        properties: &[Property],
    ) -> Result<ConfirmationData> {
        let property = properties
            .iter()
            .find(|p| p.id == request.property_id)
            .ok_or(HubError::PropertyNotFound(request.property_id))?;

        let nights = stay_nights(&request.check_in, &request.check_out);
        let total = u64::from(property.price_per_night) * u64::from(nights);
        let message = stay_message(request, property, total);
        debug!(
            "Built rental request for property {}: {} night(s), ${}",
            property.id, nights, total
        );

        Ok(ConfirmationData {
            title: "Rental Request Ready!".to_string(),
            subtitle: format!("Checking availability for {}", property.title),
            details: vec![
                DetailRow::new("Accommodation", &property.title),
                DetailRow::new("Host", &property.host_name),
                DetailRow::new("Stay Duration", nights_label(nights)),
                DetailRow::new("Total Estimate", format!("${total}")),
            ],
            outbound_link: chat_link(&self.messaging_base_url, &property.host_phone, &message),
            points_earned: STAY_BOOKING_POINTS,
        })
    }
}

fn service_message(request: &BookingRequest) -> String {
    format!(
        "🔥 NEW BOOKING REQUEST - LSERS SERVICE HUB\n\n\
         📅 Date: {}\n\
         ⏰ Time: {}\n\
         👤 Client: {}\n\
         📞 Phone: {}\n\
         📝 Task: {}",
        request.date, request.time, request.customer_name, request.customer_phone, request.description
    )
}

fn stay_message(request: &PropertyBookingRequest, property: &Property, total: u64) -> String {
    format!(
        "🏡 NEW PROPERTY RENTAL REQUEST - LSERS AIRBNB\n\n\
         📍 Property: {}\n\
         📅 Arrival: {}\n\
         📅 Departure: {}\n\
         👥 Guests: {}\n\
         👤 Guest: {}\n\
         📞 Phone: {}\n\
         💰 Est. Total: ${}",
        property.title,
        request.check_in,
        request.check_out,
        request.guests,
        request.customer_name,
        request.customer_phone,
        total
    )
}

fn nights_label(nights: u32) -> String {
    if nights == 1 {
        "1 night".to_string()
    } else {
        format!("{nights} nights")
    }
}

/// Whole nights between two dates, rounded up and never less than one.
///
/// A departure on or before arrival, or a date that cannot be read, still
/// counts as a single night.
pub fn stay_nights(check_in: &str, check_out: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_stay_date(check_in), parse_stay_date(check_out)) else {
        return 1;
    };
    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return 1;
    }
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

fn parse_stay_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc())
}
