// ── Bulk payload application ──
//
// Applies the combined `get_all_data` / `get_admin_data` payloads to
// the DataStore. Absent fields leave the matching collection untouched;
// present fields replace it wholesale, keeping the backend's order.

use serde::Deserialize;
use tracing::debug;

use super::DataStore;
use crate::fallback;
use crate::model::{
    Booking, Car, Destination, Faq, GeneratedPlan, Package, Post, ServiceOffering, SiteSettings,
    Subscriber, Testimonial,
};

/// Combined public payload from `get_all_data`. Every field is
/// optional: the backend omits tables it has no rows for.
#[derive(Debug, Default, Deserialize)]
pub struct SitePayload {
    pub packages: Option<Vec<Package>>,
    pub destinations: Option<Vec<Destination>>,
    pub services: Option<Vec<ServiceOffering>>,
    pub cars: Option<Vec<Car>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub faqs: Option<Vec<Faq>>,
    pub posts: Option<Vec<Post>>,
    pub settings: Option<SiteSettings>,
}

/// Combined admin payload from `get_admin_data`.
#[derive(Debug, Default, Deserialize)]
pub struct AdminPayload {
    pub bookings: Option<Vec<Booking>>,
    pub subscribers: Option<Vec<Subscriber>>,
    pub generated_plans: Option<Vec<GeneratedPlan>>,
}

impl DataStore {
    /// Apply a public content payload.
    ///
    /// Settings are replaced only when the payload carries a populated
    /// record -- an empty site name means the backend row is a
    /// placeholder and the hardcoded defaults stay.
    pub(crate) fn apply_site_payload(&self, payload: SitePayload) {
        if let Some(items) = payload.packages {
            self.packages.replace_all(items);
        }
        if let Some(items) = payload.destinations {
            self.destinations.replace_all(items);
        }
        if let Some(items) = payload.services {
            self.services.replace_all(items);
        }
        if let Some(items) = payload.cars {
            self.cars.replace_all(items);
        }
        if let Some(items) = payload.testimonials {
            self.testimonials.replace_all(items);
        }
        if let Some(items) = payload.faqs {
            self.faqs.replace_all(items);
        }
        if let Some(items) = payload.posts {
            self.posts.replace_all(items);
        }
        if let Some(settings) = payload.settings {
            if settings.is_populated() {
                self.set_settings(settings);
            }
        }

        self.mark_refreshed();
        debug!(
            packages = self.packages.len(),
            destinations = self.destinations.len(),
            "public content applied"
        );
    }

    /// Apply an admin content payload.
    pub(crate) fn apply_admin_payload(&self, payload: AdminPayload) {
        if let Some(items) = payload.bookings {
            self.bookings.replace_all(items);
        }
        if let Some(items) = payload.subscribers {
            self.subscribers.replace_all(items);
        }
        if let Some(items) = payload.generated_plans {
            self.generated_plans.replace_all(items);
        }

        debug!(
            bookings = self.bookings.len(),
            subscribers = self.subscribers.len(),
            "admin content applied"
        );
    }

    /// Seed the static fallback catalog when the public fetch fails
    /// entirely. Only packages, destinations, and services have seed
    /// content; other collections stay empty.
    pub(crate) fn apply_fallback(&self) {
        self.packages.replace_all(fallback::packages());
        self.destinations.replace_all(fallback::destinations());
        self.services.replace_all(fallback::services());
    }
}
