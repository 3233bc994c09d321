use service_hub::assist::{GeminiClient, LoggingOpener};
use service_hub::catalog::Catalog;
use service_hub::config::HubConfig;
use service_hub::discovery::{FilterCriteria, PriceRange, SortField};
use service_hub::models::{BookingRequest, PropertyBookingRequest};
use service_hub::session::{SearchOutcome, Session, View};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🛠️  Service Hub");
    info!("==========================================");

    let config_path =
        std::env::var("SERVICE_HUB_CONFIG").unwrap_or_else(|_| "service-hub.json".to_string());
    let config = HubConfig::load(&config_path)?;
    let catalog = Catalog::seeded();
    info!(
        "Loaded {} categories, {} providers, {} properties",
        catalog.categories().len(),
        catalog.providers().len(),
        catalog.properties().len()
    );

    let recommender = GeminiClient::new(&config.recommender, catalog.categories())?;
    let mut session = Session::new(&config, catalog);
    let opener = LoggingOpener;

    // Find a category, by AI if a key is configured
    session.navigate(View::Customer);
    session.set_query("My lights keep flickering and a socket sparks");
    let outcome = if config.recommender.api_key.is_some() {
        session.ai_search(&recommender).await
    } else {
        SearchOutcome::Unavailable
    };
    if !matches!(outcome, SearchOutcome::Matched(_)) {
        warn!("No AI match ({:?}), browsing electricians manually", outcome);
        session.select_category("electrician");
    }

    let criteria = FilterCriteria {
        min_rating: Some(4.5),
        price_range: PriceRange::Any,
        ..Default::default()
    };
    let providers = session.visible_providers(&criteria);
    info!("Showing {} professionals", providers.len());
    for provider in &providers {
        println!(
            "{} ★ {:.1} ({} reviews) · ${}/hr · {} · {}",
            provider.name,
            provider.rating,
            provider.reviews,
            provider.price_value,
            provider.distance,
            provider.availability.as_str()
        );
    }

    // Book the first match
    if let Some(provider) = providers.first() {
        session.open_service_booking(provider.id);
        let request = BookingRequest {
            provider_id: provider.id,
            customer_name: "Ada Cole".to_string(),
            customer_phone: "+231 77 555 0101".to_string(),
            date: "2024-02-01".to_string(),
            time: "10:00".to_string(),
            description: "Sparking socket in the kitchen".to_string(),
        };
        match session.start_service_booking(&request) {
            Ok(confirmation) => {
                println!("{}", serde_json::to_string_pretty(&confirmation)?);
                let points = session.finalize_booking(&opener);
                info!("Points balance: {}", points);
            }
            Err(e) => warn!("Service booking failed: {}", e),
        }
    }

    // Rent a stay
    session.navigate(View::Stays);
    let stay = PropertyBookingRequest {
        property_id: 2,
        customer_name: "Ada Cole".to_string(),
        customer_phone: "+231 77 555 0101".to_string(),
        check_in: "2024-01-10".to_string(),
        check_out: "2024-01-13".to_string(),
        guests: 2,
    };
    session.open_stay_booking(stay.property_id);
    match session.start_stay_booking(&stay) {
        Ok(confirmation) => {
            for row in &confirmation.details {
                println!("{}: {}", row.label, row.value);
            }
            let points = session.finalize_booking(&opener);
            info!("Points balance: {}", points);
        }
        Err(e) => warn!("Stay booking failed: {}", e),
    }

    // Admin console
    for key in config.admin_sequence.chars() {
        session.press_key(&key.to_string());
    }
    if session.is_admin() {
        session.toggle_sort(SortField::CompletedJobs);
        session.toggle_sort(SortField::CompletedJobs);
        info!("Top providers by completed jobs:");
        for provider in session.admin_providers().iter().take(5) {
            println!("{:>5}  {} ({})", provider.completed_jobs, provider.name, provider.category);
        }
    }

    if let Some(notice) = session.notice() {
        info!("Last notice: {}", notice.message);
    }

    Ok(())
}
