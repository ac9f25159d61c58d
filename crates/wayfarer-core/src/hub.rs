// ── Hub ──
//
// The constructed, explicitly-passed owner of all client-side state.
// Bootstraps itself from the backend, hands out confirm-then-mutate
// CRUD handles, runs the domain-specific actions, and broadcasts
// notifications after confirmed mutations. Cheaply cloneable.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{info, warn};

use wayfarer_api::{Ack, ApiClient, CrudRequest, CrudResponse, UsageResponse};

use crate::ai;
use crate::crud::CrudHandle;
use crate::model::{
    Booking, BookingStatus, Destination, DestinationInsight, Faq, ItineraryResponse, NewBooking,
    Package, Post, Record, ServiceOffering, SiteSettings, Subscriber, Testimonial, TripPlanRequest,
};
use crate::store::{AdminPayload, DataStore, SitePayload};

const NOTIFICATION_CHANNEL_SIZE: usize = 64;

/// User-facing notification, emitted only after the backend confirmed
/// the mutation it reports. Decoupled from the mutation functions so
/// the delivery mechanism (toast, badge, log) is the consumer's choice.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A booking request was accepted by the backend.
    Booking(NewBooking),
    /// A newsletter subscription was accepted.
    Subscriber { email: String },
}

/// The main entry point for consumers.
///
/// Owns the [`DataStore`] and the [`ApiClient`]; every public operation
/// returns a plain success signal (`bool`, sentinel, or default) --
/// failures never propagate past this layer.
#[derive(Clone)]
pub struct Hub {
    inner: Arc<HubInner>,
}

struct HubInner {
    api: ApiClient,
    store: DataStore,
    notifications: broadcast::Sender<Notification>,
}

impl Hub {
    pub fn new(api: ApiClient) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATION_CHANNEL_SIZE);
        Self {
            inner: Arc::new(HubInner {
                api,
                store: DataStore::new(),
                notifications,
            }),
        }
    }

    /// The underlying API client.
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// The data store consumers read from.
    pub fn store(&self) -> &DataStore {
        &self.inner.store
    }

    /// Subscribe to post-mutation notifications.
    pub fn notifications(&self) -> broadcast::Receiver<Notification> {
        self.inner.notifications.subscribe()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Initial fetch sequence, run once per session.
    ///
    /// Asserts the loading flag, fetches public content (seeding the
    /// static fallback if the fetch fails), then -- only if a session
    /// token is stored -- fetches admin content. The two fetches run
    /// sequentially, and the loading flag clears on every path.
    pub async fn bootstrap(&self) {
        self.inner.store.set_loading(true);

        self.fetch_public().await;

        if self.inner.api.tokens().load().is_some() {
            self.refresh_admin().await;
        }

        self.inner.store.set_loading(false);
        info!("bootstrap complete");
    }

    /// Re-fetch public content. Background mode never touches the
    /// loading flag, so consumers keep rendering stale data until the
    /// new snapshot lands.
    pub async fn refresh(&self, background: bool) {
        if !background {
            self.inner.store.set_loading(true);
        }

        self.fetch_public().await;

        if !background {
            self.inner.store.set_loading(false);
        }
    }

    /// Re-fetch admin content (bookings, subscribers, saved plans).
    pub async fn refresh_admin(&self) {
        match self.inner.api.get::<AdminPayload>("get_admin_data", &[]).await {
            Ok(payload) => self.inner.store.apply_admin_payload(payload),
            Err(e) => warn!(error = %e, "admin data fetch failed"),
        }
    }

    async fn fetch_public(&self) {
        match self.inner.api.get::<SitePayload>("get_all_data", &[]).await {
            Ok(payload) => self.inner.store.apply_site_payload(payload),
            Err(e) => {
                warn!(error = %e, "public data fetch failed -- seeding static fallback");
                self.inner.store.apply_fallback();
            }
        }
    }

    // ── Generic CRUD handles ─────────────────────────────────────────

    pub fn packages(&self) -> CrudHandle<'_, Package> {
        CrudHandle::new(&self.inner.api, &self.inner.store.packages)
    }

    pub fn destinations(&self) -> CrudHandle<'_, Destination> {
        CrudHandle::new(&self.inner.api, &self.inner.store.destinations)
    }

    pub fn services(&self) -> CrudHandle<'_, ServiceOffering> {
        CrudHandle::new(&self.inner.api, &self.inner.store.services)
    }

    pub fn testimonials(&self) -> CrudHandle<'_, Testimonial> {
        CrudHandle::new(&self.inner.api, &self.inner.store.testimonials)
    }

    pub fn faqs(&self) -> CrudHandle<'_, Faq> {
        CrudHandle::new(&self.inner.api, &self.inner.store.faqs)
    }

    pub fn posts(&self) -> CrudHandle<'_, Post> {
        CrudHandle::new(&self.inner.api, &self.inner.store.posts)
    }

    /// Admin-side subscriber management (removal, mostly).
    pub fn subscribers(&self) -> CrudHandle<'_, Subscriber> {
        CrudHandle::new(&self.inner.api, &self.inner.store.subscribers)
    }

    // ── Domain actions ───────────────────────────────────────────────

    /// Submit a booking request from the public site.
    ///
    /// The new booking is NOT appended to the local collection: the
    /// admin view re-fetches bookings, and the public site never lists
    /// them. A notification fires once the backend confirms.
    pub async fn add_booking(&self, booking: NewBooking) -> bool {
        let ok = ack_result(
            "create_booking",
            self.inner.api.post("create_booking", &booking).await,
        );
        if ok {
            let _ = self.inner.notifications.send(Notification::Booking(booking));
        }
        ok
    }

    /// Patch a booking's status. Only the status field changes locally;
    /// every other field and every other booking stays untouched.
    pub async fn update_booking_status(&self, id: &str, status: BookingStatus) -> bool {
        #[derive(Serialize)]
        struct StatusPatch<'a> {
            id: &'a str,
            status: BookingStatus,
        }

        let patch = StatusPatch { id, status };
        let result: Result<CrudResponse, _> = self
            .inner
            .api
            .post("crud", &CrudRequest::update(Booking::TABLE, &patch))
            .await;

        match result {
            Ok(res) if res.success => {
                self.inner.store.bookings.patch(id, |b| b.status = status);
                true
            }
            Ok(res) => {
                warn!(id, error = res.error.as_deref().unwrap_or("unconfirmed"), "status update rejected");
                false
            }
            Err(e) => {
                warn!(id, error = %e, "status update failed");
                false
            }
        }
    }

    /// Subscribe an email to the newsletter. Like bookings, the local
    /// subscriber collection is left alone; only the notification fires.
    pub async fn add_subscriber(&self, email: &str) -> bool {
        #[derive(Serialize)]
        struct SubscribeBody<'a> {
            email: &'a str,
        }

        let ok = ack_result(
            "add_subscriber",
            self.inner.api.post("add_subscriber", &SubscribeBody { email }).await,
        );
        if ok {
            let _ = self
                .inner
                .notifications
                .send(Notification::Subscriber { email: email.to_owned() });
        }
        ok
    }

    /// Persist a generated itinerary pair. Fire-and-forget: no local
    /// mirroring, the admin view re-fetches saved plans.
    pub async fn save_generated_plan(
        &self,
        email: &str,
        request: &TripPlanRequest,
        response: &ItineraryResponse,
    ) -> bool {
        #[derive(Serialize)]
        struct SaveBody<'a> {
            email: &'a str,
            request: &'a TripPlanRequest,
            response: &'a ItineraryResponse,
        }

        ack_result(
            "save_plan",
            self.inner
                .api
                .post("save_plan", &SaveBody { email, request, response })
                .await,
        )
    }

    /// Whether this email may run another AI generation. Defaults to
    /// not-allowed when the backend is unreachable.
    pub async fn check_ai_usage(&self, email: &str) -> bool {
        match self
            .inner
            .api
            .get::<UsageResponse>("check_ai_usage", &[("email", email)])
            .await
        {
            Ok(usage) => usage.allowed,
            Err(e) => {
                warn!(error = %e, "AI usage check failed -- denying");
                false
            }
        }
    }

    /// Replace the settings singleton, locally and remotely. The local
    /// copy changes only after the backend confirms.
    pub async fn update_settings(&self, settings: SiteSettings) -> bool {
        let ok = ack_result(
            "update_settings",
            self.inner.api.post("update_settings", &settings).await,
        );
        if ok {
            self.inner.store.set_settings(settings);
        }
        ok
    }

    /// Upload a media asset, returning its URL, or `None` on failure.
    pub async fn upload_asset(&self, file_name: &str, bytes: Vec<u8>) -> Option<String> {
        match self.inner.api.upload(file_name, bytes).await {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(file_name, error = %e, "upload failed");
                None
            }
        }
    }

    // ── AI proxy (provider from current settings) ────────────────────

    pub async fn generate_trip_plan(&self, request: &TripPlanRequest) -> ItineraryResponse {
        let provider = self.inner.store.settings().ai_provider;
        ai::generate_trip_plan(&self.inner.api, request, provider).await
    }

    pub async fn destination_insights(&self, destination: &str) -> DestinationInsight {
        let provider = self.inner.store.settings().ai_provider;
        ai::destination_insights(&self.inner.api, destination, provider).await
    }
}

/// Collapse an `Ack` result to a boolean, logging the reason when the
/// backend rejected or the call failed.
fn ack_result(action: &str, result: Result<Ack, wayfarer_api::Error>) -> bool {
    match result {
        Ok(ack) if ack.success => true,
        Ok(ack) => {
            warn!(action, error = ack.error.as_deref().unwrap_or("unconfirmed"), "action rejected by backend");
            false
        }
        Err(e) => {
            warn!(action, error = %e, "action failed");
            false
        }
    }
}
