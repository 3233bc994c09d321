use crate::models::{Availability, CategoryGroup, PortfolioItem, Property, Provider, ServiceCategory};

const PHOTO_BATCH: [&str; 8] = [
    "1507003211-a90c1637-c24c-4608-8d2e-71fbb9226f2c",
    "1438761681-c6cb0372-6b8c-4b42-96dc-4fdfba394b65",
    "1500648767791-00dcc994a43e",
    "1494790108-ea87e2ac-c304-4554-aa09-f8c8093e5610",
    "1472099645-e36c4e4a70f6",
    "1539571696357-5a69c17a67c6",
    "1506794778202-cad84cf45f1d",
    "1544005313-94ddf0286df2",
];

/// The full list of service categories offered in the directory
pub fn categories() -> Vec<ServiceCategory> {
    let table: [(&str, &str, &str, &str, CategoryGroup); 46] = [
        ("electrician", "Electrician", "⚡", "Wiring & Repairs", CategoryGroup::Home),
        ("plumber", "Plumber", "🔧", "Pipes & Fixtures", CategoryGroup::Home),
        ("handyman", "Handyman", "🔨", "General Repairs", CategoryGroup::Home),
        ("cleaner", "Cleaner", "🧹", "Home & Office", CategoryGroup::Home),
        ("painter", "Painter", "🎨", "Interior & Exterior", CategoryGroup::Home),
        ("carpenter", "Carpenter", "🪚", "Wood & Furniture", CategoryGroup::Home),
        ("mason", "Mason", "🧱", "Bricks & Concrete", CategoryGroup::Home),
        ("roofer", "Roofer", "🏠", "Roof Repair", CategoryGroup::Home),
        ("welder", "Welder", "🔥", "Metal Work", CategoryGroup::Home),
        ("hvac", "HVAC Tech", "❄️", "AC & Heating", CategoryGroup::Home),
        ("property-mgmt", "Property Manager", "🏢", "Airbnb & Rentals", CategoryGroup::Professional),
        ("short-term-support", "Hosting Support", "🔑", "Short-term Rentals", CategoryGroup::Home),
        ("computer-repair", "Computer Repair", "💻", "Hardware & Software", CategoryGroup::Tech),
        ("software-dev", "Software Dev", "👨‍💻", "Apps & Websites", CategoryGroup::Tech),
        ("phone-repair", "Phone Repair", "📱", "Mobile Devices", CategoryGroup::Tech),
        ("tv-repair", "TV Repair", "📺", "Electronics", CategoryGroup::Tech),
        ("network-setup", "Network Setup", "🌐", "WiFi & Internet", CategoryGroup::Tech),
        ("graphics-design", "Graphics Design", "🎨", "Logos & Branding", CategoryGroup::Creative),
        ("photography", "Photography", "📸", "Events & Portraits", CategoryGroup::Creative),
        ("videography", "Videography", "🎥", "Video Production", CategoryGroup::Creative),
        ("music-producer", "Music Producer", "🎵", "Audio & Beats", CategoryGroup::Creative),
        ("dj", "DJ Services", "🎧", "Events & Parties", CategoryGroup::Creative),
        ("tutor", "Tutor", "📚", "Academic Help", CategoryGroup::Professional),
        ("freelance-writer", "Freelance Writer", "✍️", "Content & Articles", CategoryGroup::Professional),
        ("translator", "Translator", "🌍", "Language Services", CategoryGroup::Professional),
        ("accountant", "Accountant", "💰", "Tax & Bookkeeping", CategoryGroup::Professional),
        ("legal-advisor", "Legal Advisor", "⚖️", "Legal Consultation", CategoryGroup::Professional),
        ("driver", "Driver", "🚗", "Transportation", CategoryGroup::Transport),
        ("delivery", "Delivery", "📦", "Package & Food", CategoryGroup::Transport),
        ("moving", "Moving Service", "📦", "Relocation Help", CategoryGroup::Transport),
        ("mechanic", "Auto Mechanic", "🔧", "Car Repair", CategoryGroup::Transport),
        ("motorcycle-repair", "Motorcycle Repair", "🏍️", "Bike Maintenance", CategoryGroup::Transport),
        ("barber", "Barber", "✂️", "Hair Cutting", CategoryGroup::Personal),
        ("hairstylist", "Hair Stylist", "💇‍♀️", "Hair & Beauty", CategoryGroup::Personal),
        ("makeup-artist", "Makeup Artist", "💄", "Beauty & Events", CategoryGroup::Personal),
        ("massage-therapist", "Massage Therapist", "💆", "Wellness & Relaxation", CategoryGroup::Personal),
        ("fitness-trainer", "Fitness Trainer", "💪", "Personal Training", CategoryGroup::Personal),
        ("chef", "Personal Chef", "👨‍🍳", "Cooking Services", CategoryGroup::Food),
        ("catering", "Catering", "🍽️", "Event Food", CategoryGroup::Food),
        ("baker", "Baker", "🧁", "Cakes & Pastries", CategoryGroup::Food),
        ("security-guard", "Security Guard", "🛡️", "Property Protection", CategoryGroup::Security),
        ("locksmith", "Locksmith", "🔐", "Lock & Key Services", CategoryGroup::Security),
        ("gardener", "Gardener", "🌱", "Landscaping", CategoryGroup::Outdoor),
        ("pest-control", "Pest Control", "🐛", "Extermination", CategoryGroup::Outdoor),
        ("event-planner", "Event Planner", "🎉", "Party Organization", CategoryGroup::Event),
        ("decorator", "Decorator", "🎈", "Event Decoration", CategoryGroup::Event),
    ];

    table
        .into_iter()
        .map(|(id, title, icon, description, group)| ServiceCategory {
            id: id.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            group,
        })
        .collect()
}

/// Rental listings shown on the stays screen
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Luxury Oceanview Villa".to_string(),
            location: "Monrovia, Robertsfield Hwy".to_string(),
            price_per_night: 150,
            rating: 4.9,
            reviews: 42,
            photo_id: "1564013799-b1ddec28a941".to_string(),
            description: "Beach getaway in a 3-bedroom villa with panoramic ocean views, private beach access and a fully equipped kitchen.".to_string(),
            host_name: "Kema Johnson".to_string(),
            host_phone: "+231776966080".to_string(),
            amenities: strings(&["Free WiFi", "Private Pool", "Air Conditioning", "Security 24/7"]),
        },
        Property {
            id: 2,
            title: "Modern City Apartment".to_string(),
            location: "Sinkor, 12th Street".to_string(),
            price_per_night: 85,
            rating: 4.7,
            reviews: 128,
            photo_id: "1502672260266-1c1ef2d93688".to_string(),
            description: "Sleek apartment in the heart of Sinkor, close to offices, restaurants and shopping.".to_string(),
            host_name: "Musa Kamara".to_string(),
            host_phone: "+231776966081".to_string(),
            amenities: strings(&["High-speed Internet", "Work Space", "Generator Backup", "Laundry"]),
        },
        Property {
            id: 3,
            title: "Peaceful Garden Cottage".to_string(),
            location: "Paynesville, Rehab".to_string(),
            price_per_night: 65,
            rating: 4.8,
            reviews: 15,
            photo_id: "1580587771525-78b9ec3bca4b".to_string(),
            description: "Cozy cottage in a quiet neighborhood, surrounded by tropical gardens.".to_string(),
            host_name: "Sarah Doe".to_string(),
            host_phone: "+231776966082".to_string(),
            amenities: strings(&["Tropical Garden", "Breakfast Included", "Kitchenette", "Free Parking"]),
        },
        Property {
            id: 4,
            title: "Executive Penthouse Suite".to_string(),
            location: "Mamba Point".to_string(),
            price_per_night: 210,
            rating: 5.0,
            reviews: 8,
            photo_id: "1512917774080-9991f1c4c750".to_string(),
            description: "Penthouse overlooking the Atlantic with concierge service and a rooftop terrace.".to_string(),
            host_name: "Ambassador Suites".to_string(),
            host_phone: "+231776966083".to_string(),
            amenities: strings(&["Private Elevator", "Concierge", "Gym Access", "Rooftop Terrace"]),
        },
    ]
}

/// Sample projects attached to every generated provider
pub fn sample_portfolio() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            photo_id: "1581092160607-ee22621ddbb3".to_string(),
            title: "Smart Home Installation".to_string(),
            description: "Complete rewiring and smart control panel integration for a luxury villa.".to_string(),
        },
        PortfolioItem {
            photo_id: "1504148455328-497c1121d494".to_string(),
            title: "Modern Lighting Design".to_string(),
            description: "Architectural lighting setup for a high-end restaurant in Monrovia.".to_string(),
        },
        PortfolioItem {
            photo_id: "1484154218962-a197022b5858".to_string(),
            title: "Kitchen Renovation".to_string(),
            description: "Full plumbing and appliance installation for a modern home makeover.".to_string(),
        },
    ]
}

/// Generate one provider per category.
///
/// Figures are derived from the provider id so the mock catalog is the same
/// on every run.
pub fn providers(categories: &[ServiceCategory]) -> Vec<Provider> {
    categories
        .iter()
        .enumerate()
        .map(|(index, cat)| {
            let id = index as u32 + 1;
            let distance_value = round_to(0.5 + spread(id, 2) * 4.5, 1);
            Provider {
                id,
                name: format!("Expert {} 1", cat.title),
                rating: round_to(4.5 + spread(id, 0) * 0.5, 2),
                reviews: 20 + (spread(id, 1) * 100.0) as u32,
                distance: format!("{distance_value:.1} miles"),
                distance_value,
                price_value: 30 + (spread(id, 3) * 100.0) as u32,
                experience: format!("{} years", 3 + (spread(id, 4) * 10.0) as u32),
                specialties: cat.description.split(" & ").map(str::to_string).collect(),
                availability: match id % 3 {
                    0 => Availability::Tomorrow,
                    1 => Availability::Now,
                    _ => Availability::Today,
                },
                photo_id: PHOTO_BATCH[id as usize % PHOTO_BATCH.len()].to_string(),
                phone: format!("+23177{}", 1_000_000 + (spread(id, 5) * 9_000_000.0) as u32),
                whatsapp: None,
                bio: format!(
                    "Professional {} with extensive experience in {}. Highly recommended in the community for high-quality workmanship and reliability.",
                    cat.title, cat.description
                ),
                certifications: strings(&["Verified Professional", "Safe Work Certified"]),
                completed_jobs: 50 + (spread(id, 6) * 500.0) as u32,
                response_time: "15 mins".to_string(),
                languages: strings(&["English"]),
                category: cat.id.clone(),
                portfolio: sample_portfolio(),
            }
        })
        .collect()
}

/// Deterministic value in `[0, 1)` for a given id and field slot
fn spread(id: u32, slot: u32) -> f64 {
    let mut x = u64::from(id)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(u64::from(slot).wrapping_mul(0xBF58_476D_1CE4_E5B9));
    x ^= x >> 31;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 29;
    (x >> 11) as f64 / (1u64 << 53) as f64
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_providers_stay_in_range() {
        let cats = categories();
        let providers = providers(&cats);
        assert_eq!(providers.len(), cats.len());

        for p in &providers {
            assert!((4.5..=5.0).contains(&p.rating), "rating {}", p.rating);
            assert!((0.5..=5.0).contains(&p.distance_value));
            assert!((30..130).contains(&p.price_value));
            assert!(p.completed_jobs >= 50);
            assert!(cats.iter().any(|c| c.id == p.category));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let cats = categories();
        assert_eq!(providers(&cats), providers(&cats));
    }
}
