// ── Domain model ──
//
// Entities are schema-tolerant: a handful of typed fields the client
// actually reads, plus a flattened map for everything else the backend
// sends. The store never interprets records beyond their identifier.

mod booking;
mod catalog;
mod plan;
mod settings;

pub use booking::{Booking, BookingStatus, GeneratedPlan, NewBooking, Subscriber};
pub use catalog::{Car, Destination, Faq, Package, Post, ServiceOffering, Testimonial};
pub use plan::{AiProvider, DestinationInsight, ItineraryDay, ItineraryResponse, TripPlanRequest};
pub use settings::{SeoSettings, SiteSettings};

/// An entity record the store can mirror.
///
/// `TABLE` is the backend table identifier used by the generic `crud`
/// action; `id` is backend-assigned on create and immutable afterwards.
pub trait Record: Clone + Send + Sync + 'static {
    /// Backend table identifier for the generic `crud` action.
    const TABLE: &'static str;

    /// The backend-assigned identifier. Empty on records not yet created.
    fn id(&self) -> &str;

    /// Adopt the identifier the backend assigned on create.
    fn set_id(&mut self, id: String);
}

/// Implements [`Record`] for a struct with a `String` field named `id`.
macro_rules! impl_record {
    ($ty:ty, $table:literal) => {
        impl crate::model::Record for $ty {
            const TABLE: &'static str = $table;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

pub(crate) use impl_record;
