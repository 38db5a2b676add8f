//! Built-in catalog used when no catalog file is configured.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::models::{AddOn, AddOnKind, EmiPlan, Inventory, Package, PricingBasis};
use super::slug::slugify;

fn package(id: &str, title: &str, subtitle: &str, base_name: &str) -> Package {
    Package {
        id: id.to_string(),
        slug: slugify(title),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        base_name: base_name.to_string(),
        base_price_per_person: dec!(0),
        nights: 0,
        currency: "INR".to_string(),
        add_ons: Vec::new(),
        event_date: None,
        location: None,
        highlights: Vec::new(),
        inventory: Inventory::default(),
        emi_plans: Vec::new(),
    }
}

pub fn packages() -> Vec<Package> {
    let mut singapore = package(
        "1",
        "Singapore F1 Grand Prix",
        "Experience the thrill of Formula 1 racing under the lights at Marina Bay Circuit",
        "F1 Race Tickets",
    );
    singapore.base_price_per_person = dec!(25000);
    singapore.nights = 2;
    singapore.event_date = NaiveDate::from_ymd_opt(2024, 9, 15);
    singapore.location = Some("Marina Bay Circuit, Singapore".to_string());
    singapore.add_ons = vec![
        AddOn::new(AddOnKind::Flights, "Return Flights", dec!(12000)),
        AddOn::new(AddOnKind::Hotel, "Luxury Hotel Stay", dec!(8000)),
        AddOn::new(AddOnKind::Insurance, "Travel Insurance", dec!(400)),
    ];
    singapore.inventory = Inventory::default()
        .with(AddOnKind::Flights, 10)
        .with(AddOnKind::Hotel, 6);

    let mut liverpool = package(
        "2",
        "Liverpool vs Manchester United",
        "Witness the biggest rivalry in English football at Anfield Stadium",
        "Match Tickets",
    );
    liverpool.base_price_per_person = dec!(20000);
    liverpool.nights = 3;
    liverpool.event_date = NaiveDate::from_ymd_opt(2024, 10, 20);
    liverpool.location = Some("Anfield Stadium, Liverpool".to_string());
    liverpool.add_ons = vec![
        AddOn::new(AddOnKind::Flights, "Return Flights", dec!(15000)),
        AddOn::new(AddOnKind::Hotel, "Hotel Accommodation", dec!(6500)),
        AddOn::new(AddOnKind::DayTrip, "Manchester Day Trip", dec!(2500)),
        AddOn::new(AddOnKind::Transfers, "Airport Transfers", dec!(1200)),
        AddOn::new(AddOnKind::Insurance, "Travel Insurance", dec!(400)),
    ];

    let mut paris = package(
        "3",
        "French Open Tennis Championship",
        "Experience the clay court magic at Roland Garros",
        "Tennis Tournament Tickets",
    );
    paris.base_price_per_person = dec!(30000);
    paris.nights = 4;
    paris.event_date = NaiveDate::from_ymd_opt(2024, 5, 26);
    paris.location = Some("Roland Garros, Paris".to_string());
    paris.add_ons = vec![
        AddOn::new(AddOnKind::Flights, "Return Flights", dec!(18000)),
        AddOn::new(AddOnKind::Hotel, "Paris Hotel Stay", dec!(4500))
            .with_basis(PricingBasis::PerRoomNight),
        AddOn::new(AddOnKind::Insurance, "Travel Insurance", dec!(400)),
    ];
    paris.emi_plans = vec![
        EmiPlan {
            tenure_months: 6,
            annual_rate_percent: dec!(0),
        },
        EmiPlan {
            tenure_months: 12,
            annual_rate_percent: dec!(11.5),
        },
    ];

    let mut all = vec![singapore, liverpool, paris];
    for p in &mut all {
        let mut highlights = vec![p.base_name.clone()];
        highlights.extend(p.add_ons.iter().map(|a| a.name.clone()));
        if let Some(date) = p.event_date {
            highlights.push(format!("Event Date: {}", date));
        }
        highlights.extend(p.location.clone());
        p.highlights = highlights;
    }
    all
}
