// ── Static fallback catalog ──
//
// Seeded into the store when the public bootstrap fetch yields nothing,
// so the site renders real-looking content instead of a blank page.
// Ids use a `static-` prefix to keep them apart from backend rows.

use crate::model::{Destination, Package, ServiceOffering};

pub(crate) fn packages() -> Vec<Package> {
    vec![
        Package {
            id: "static-pkg-1".into(),
            title: "Masai Mara Classic Safari".into(),
            description: "Three days of game drives across the Mara plains, \
                          full-board tented camp."
                .into(),
            price: Some(650.0),
            duration: Some("3 days".into()),
            image: Some("/assets/fallback/mara.jpg".into()),
            ..Package::default()
        },
        Package {
            id: "static-pkg-2".into(),
            title: "Zanzibar Beach Escape".into(),
            description: "Five nights on Nungwi beach with spice-farm and \
                          Stone Town excursions."
                .into(),
            price: Some(890.0),
            duration: Some("6 days".into()),
            image: Some("/assets/fallback/zanzibar.jpg".into()),
            ..Package::default()
        },
        Package {
            id: "static-pkg-3".into(),
            title: "Kilimanjaro Machame Route".into(),
            description: "Seven-day guided trek to Uhuru Peak via the \
                          Machame route."
                .into(),
            price: Some(2100.0),
            duration: Some("7 days".into()),
            image: Some("/assets/fallback/kilimanjaro.jpg".into()),
            ..Package::default()
        },
    ]
}

pub(crate) fn destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: "static-dest-1".into(),
            name: "Masai Mara".into(),
            country: Some("Kenya".into()),
            description: "Rolling savannah famous for the great wildebeest \
                          migration."
                .into(),
            image: Some("/assets/fallback/mara.jpg".into()),
            ..Destination::default()
        },
        Destination {
            id: "static-dest-2".into(),
            name: "Zanzibar".into(),
            country: Some("Tanzania".into()),
            description: "Spice island beaches and the alleys of Stone Town.".into(),
            image: Some("/assets/fallback/zanzibar.jpg".into()),
            ..Destination::default()
        },
        Destination {
            id: "static-dest-3".into(),
            name: "Amboseli".into(),
            country: Some("Kenya".into()),
            description: "Elephant herds under the face of Kilimanjaro.".into(),
            image: Some("/assets/fallback/amboseli.jpg".into()),
            ..Destination::default()
        },
    ]
}

pub(crate) fn services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            id: "static-svc-1".into(),
            title: "Airport Transfers".into(),
            description: "Meet-and-greet pickups for all arrivals.".into(),
            icon: Some("plane".into()),
            ..ServiceOffering::default()
        },
        ServiceOffering {
            id: "static-svc-2".into(),
            title: "Visa Assistance".into(),
            description: "Document checks and application handling for East \
                          African visas."
                .into(),
            icon: Some("passport".into()),
            ..ServiceOffering::default()
        },
        ServiceOffering {
            id: "static-svc-3".into(),
            title: "Custom Itineraries".into(),
            description: "Trips built around your dates, budget, and pace.".into(),
            icon: Some("map".into()),
            ..ServiceOffering::default()
        },
    ]
}
