// wayfarer-core: Data-synchronization layer between wayfarer-api and consumers.
//
// Bootstraps all site content from the backend, mirrors it in a
// reactive store, and exposes confirm-then-mutate actions. Failures are
// absorbed here: consumers see booleans and sentinels, never errors.

pub mod ai;
pub mod crud;
mod fallback;
pub mod hub;
pub mod model;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use crud::CrudHandle;
pub use hub::{Hub, Notification};
pub use store::{AdminPayload, DataStore, SitePayload};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Catalog entities
    Car, Destination, Faq, Package, Post, ServiceOffering, Testimonial,
    // Admin entities
    Booking, BookingStatus, GeneratedPlan, NewBooking, Subscriber,
    // AI itinerary types
    AiProvider, DestinationInsight, ItineraryDay, ItineraryResponse, TripPlanRequest,
    // Settings singleton
    SeoSettings, SiteSettings,
    // Identifier abstraction
    Record,
};
