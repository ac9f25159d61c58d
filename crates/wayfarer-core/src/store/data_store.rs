// ── Central reactive data store ──
//
// One process-wide snapshot of all fetched domain state: ten entity
// collections, the settings singleton, the loading flag, and the last
// refresh timestamp. Owned by the Hub, read by consumers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::collection::EntityCollection;
use crate::model::{
    Booking, Car, Destination, Faq, GeneratedPlan, Package, Post, ServiceOffering, SiteSettings,
    Subscriber, Testimonial,
};

/// Central store for all fetched domain state.
///
/// Collections keep last-fetch order; mutations land only after the
/// backend confirms them (confirm-then-mutate). Every collection and
/// the settings singleton broadcast snapshots through `watch` channels
/// so consumers can re-render on change.
pub struct DataStore {
    pub(crate) packages: EntityCollection<Package>,
    pub(crate) destinations: EntityCollection<Destination>,
    pub(crate) services: EntityCollection<ServiceOffering>,
    pub(crate) cars: EntityCollection<Car>,
    pub(crate) testimonials: EntityCollection<Testimonial>,
    pub(crate) faqs: EntityCollection<Faq>,
    pub(crate) posts: EntityCollection<Post>,
    pub(crate) bookings: EntityCollection<Booking>,
    pub(crate) subscribers: EntityCollection<Subscriber>,
    pub(crate) generated_plans: EntityCollection<GeneratedPlan>,
    settings: watch::Sender<Arc<SiteSettings>>,
    loading: watch::Sender<bool>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    pub fn new() -> Self {
        let (settings, _) = watch::channel(Arc::new(SiteSettings::default()));
        // Consumers gate their first render on this flag, so it starts
        // asserted: nothing has been fetched yet.
        let (loading, _) = watch::channel(true);
        let (last_refresh, _) = watch::channel(None);

        Self {
            packages: EntityCollection::new(),
            destinations: EntityCollection::new(),
            services: EntityCollection::new(),
            cars: EntityCollection::new(),
            testimonials: EntityCollection::new(),
            faqs: EntityCollection::new(),
            posts: EntityCollection::new(),
            bookings: EntityCollection::new(),
            subscribers: EntityCollection::new(),
            generated_plans: EntityCollection::new(),
            settings,
            loading,
            last_refresh,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn packages_snapshot(&self) -> Arc<Vec<Arc<Package>>> {
        self.packages.snapshot()
    }

    pub fn destinations_snapshot(&self) -> Arc<Vec<Arc<Destination>>> {
        self.destinations.snapshot()
    }

    pub fn services_snapshot(&self) -> Arc<Vec<Arc<ServiceOffering>>> {
        self.services.snapshot()
    }

    pub fn cars_snapshot(&self) -> Arc<Vec<Arc<Car>>> {
        self.cars.snapshot()
    }

    pub fn testimonials_snapshot(&self) -> Arc<Vec<Arc<Testimonial>>> {
        self.testimonials.snapshot()
    }

    pub fn faqs_snapshot(&self) -> Arc<Vec<Arc<Faq>>> {
        self.faqs.snapshot()
    }

    pub fn posts_snapshot(&self) -> Arc<Vec<Arc<Post>>> {
        self.posts.snapshot()
    }

    pub fn bookings_snapshot(&self) -> Arc<Vec<Arc<Booking>>> {
        self.bookings.snapshot()
    }

    pub fn subscribers_snapshot(&self) -> Arc<Vec<Arc<Subscriber>>> {
        self.subscribers.snapshot()
    }

    pub fn generated_plans_snapshot(&self) -> Arc<Vec<Arc<GeneratedPlan>>> {
        self.generated_plans.snapshot()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn package_by_id(&self, id: &str) -> Option<Arc<Package>> {
        self.packages.get(id)
    }

    pub fn destination_by_id(&self, id: &str) -> Option<Arc<Destination>> {
        self.destinations.get(id)
    }

    pub fn booking_by_id(&self, id: &str) -> Option<Arc<Booking>> {
        self.bookings.get(id)
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_packages(&self) -> watch::Receiver<Arc<Vec<Arc<Package>>>> {
        self.packages.subscribe()
    }

    pub fn subscribe_destinations(&self) -> watch::Receiver<Arc<Vec<Arc<Destination>>>> {
        self.destinations.subscribe()
    }

    pub fn subscribe_services(&self) -> watch::Receiver<Arc<Vec<Arc<ServiceOffering>>>> {
        self.services.subscribe()
    }

    pub fn subscribe_cars(&self) -> watch::Receiver<Arc<Vec<Arc<Car>>>> {
        self.cars.subscribe()
    }

    pub fn subscribe_testimonials(&self) -> watch::Receiver<Arc<Vec<Arc<Testimonial>>>> {
        self.testimonials.subscribe()
    }

    pub fn subscribe_faqs(&self) -> watch::Receiver<Arc<Vec<Arc<Faq>>>> {
        self.faqs.subscribe()
    }

    pub fn subscribe_posts(&self) -> watch::Receiver<Arc<Vec<Arc<Post>>>> {
        self.posts.subscribe()
    }

    pub fn subscribe_bookings(&self) -> watch::Receiver<Arc<Vec<Arc<Booking>>>> {
        self.bookings.subscribe()
    }

    pub fn subscribe_subscribers(&self) -> watch::Receiver<Arc<Vec<Arc<Subscriber>>>> {
        self.subscribers.subscribe()
    }

    pub fn subscribe_generated_plans(&self) -> watch::Receiver<Arc<Vec<Arc<GeneratedPlan>>>> {
        self.generated_plans.subscribe()
    }

    // ── Settings singleton ───────────────────────────────────────────

    pub fn settings(&self) -> Arc<SiteSettings> {
        self.settings.borrow().clone()
    }

    pub fn subscribe_settings(&self) -> watch::Receiver<Arc<SiteSettings>> {
        self.settings.subscribe()
    }

    /// Wholesale replacement of the settings singleton.
    pub(crate) fn set_settings(&self, settings: SiteSettings) {
        self.settings.send_modify(|current| *current = Arc::new(settings));
    }

    // ── Loading flag ─────────────────────────────────────────────────

    /// Whether the bootstrap fetch sequence is still in flight.
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Publishes only on an actual transition, so consumers never see
    /// a redundant true -> true edge.
    pub(crate) fn set_loading(&self, loading: bool) {
        self.loading.send_if_modified(|current| {
            if *current == loading {
                return false;
            }
            *current = loading;
            true
        });
    }

    // ── Refresh metadata ─────────────────────────────────────────────

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// How long ago the last successful fetch landed, or `None` if
    /// nothing was ever fetched.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|t| Utc::now() - t)
    }

    pub(crate) fn mark_refreshed(&self) {
        self.last_refresh.send_modify(|t| *t = Some(Utc::now()));
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
