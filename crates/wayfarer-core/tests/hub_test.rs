#![allow(clippy::unwrap_used)]
// End-to-end tests for the Hub against a wiremock backend: bootstrap,
// confirm-then-mutate CRUD, domain actions, and notifications.

use std::sync::Arc;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wayfarer_api::{ApiClient, MemoryTokenStore, TokenStore};
use wayfarer_core::{BookingStatus, Hub, NewBooking, Notification, Package, SiteSettings};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(tokens: Arc<MemoryTokenStore>) -> (MockServer, Hub) {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&server.uri()).unwrap();
    let api = ApiClient::with_client(reqwest::Client::new(), endpoint, tokens);
    (server, Hub::new(api))
}

async fn setup_anonymous() -> (MockServer, Hub) {
    setup(Arc::new(MemoryTokenStore::new())).await
}

/// Mount a `get_all_data` response with two packages.
async fn mount_public_packages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(query_param("action", "get_all_data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "packages": [
                { "id": "P1", "title": "Alpha" },
                { "id": "P2", "title": "Beta" },
            ]
        })))
        .mount(server)
        .await;
}

fn package_ids(hub: &Hub) -> Vec<String> {
    hub.store()
        .packages_snapshot()
        .iter()
        .map(|p| p.id.clone())
        .collect()
}

// ── Bootstrap ───────────────────────────────────────────────────────

#[tokio::test]
async fn bootstrap_without_token_skips_admin_fetch() {
    let (server, hub) = setup_anonymous().await;
    mount_public_packages(&server).await;

    let mut loading = hub.store().subscribe_loading();
    assert!(*loading.borrow_and_update(), "loading starts asserted");

    hub.bootstrap().await;

    assert_eq!(package_ids(&hub), ["P1", "P2"]);

    // Exactly one transition: true -> false.
    assert!(loading.has_changed().unwrap());
    assert!(!*loading.borrow_and_update());
    assert!(!loading.has_changed().unwrap());

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests.iter().all(|r| !r.url.as_str().contains("get_admin_data")),
        "admin fetch must not fire without a stored token"
    );
}

#[tokio::test]
async fn bootstrap_with_token_fetches_admin_content_sequentially() {
    let tokens = Arc::new(MemoryTokenStore::with_token("admin-token"));
    let (server, hub) = setup(tokens).await;
    mount_public_packages(&server).await;

    Mock::given(method("GET"))
        .and(query_param("action", "get_admin_data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookings": [
                { "id": "B1", "name": "Asha", "email": "asha@example.com", "status": "pending" },
            ],
            "subscribers": [ { "id": "S1", "email": "a@b.com" } ],
        })))
        .mount(&server)
        .await;

    hub.bootstrap().await;

    assert_eq!(hub.store().bookings_snapshot().len(), 1);
    assert_eq!(hub.store().subscribers_snapshot().len(), 1);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.as_str().contains("get_all_data"));
    assert!(requests[1].url.as_str().contains("get_admin_data"));
}

#[tokio::test]
async fn bootstrap_with_dead_backend_seeds_static_fallback() {
    // Nothing mounted: every request 404s.
    let (_server, hub) = setup_anonymous().await;

    hub.bootstrap().await;

    let packages = hub.store().packages_snapshot();
    assert!(!packages.is_empty(), "fallback catalog must be seeded");
    assert!(packages.iter().all(|p| p.id.starts_with("static-")));
    assert!(!hub.store().destinations_snapshot().is_empty());
    assert!(!hub.store().services_snapshot().is_empty());
    // Collections without seed content stay empty.
    assert!(hub.store().testimonials_snapshot().is_empty());
    assert!(!hub.store().is_loading());
}

#[tokio::test]
async fn background_refresh_never_toggles_the_loading_flag() {
    let (server, hub) = setup_anonymous().await;
    mount_public_packages(&server).await;

    hub.bootstrap().await;

    let mut loading = hub.store().subscribe_loading();
    loading.mark_unchanged();

    hub.refresh(true).await;

    assert!(!loading.has_changed().unwrap());
    assert!(!hub.store().is_loading());
}

#[tokio::test]
async fn expired_token_is_evicted_during_admin_fetch() {
    let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
    let (server, hub) = setup(Arc::clone(&tokens)).await;
    mount_public_packages(&server).await;

    Mock::given(method("GET"))
        .and(query_param("action", "get_admin_data"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    hub.bootstrap().await;

    assert!(tokens.load().is_none(), "401 must evict the stored token");
    assert!(hub.store().bookings_snapshot().is_empty());
    assert!(!hub.store().is_loading(), "loading clears even on the failure path");
}

// ── Generic CRUD ────────────────────────────────────────────────────

#[tokio::test]
async fn crud_add_appends_with_backend_assigned_id() {
    let (server, hub) = setup_anonymous().await;
    mount_public_packages(&server).await;
    hub.bootstrap().await;

    Mock::given(method("POST"))
        .and(query_param("action", "crud"))
        .and(body_partial_json(json!({ "table": "packages", "op": "create" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "id": "P9" })),
        )
        .mount(&server)
        .await;

    let added = hub
        .packages()
        .add(Package { title: "Gamma".into(), ..Package::default() })
        .await;

    assert!(added);
    assert_eq!(package_ids(&hub), ["P1", "P2", "P9"]);

    // The create payload must not carry an id.
    let requests = server.received_requests().await.unwrap();
    let create = requests.iter().find(|r| r.url.as_str().contains("action=crud")).unwrap();
    let body: serde_json::Value = serde_json::from_slice(&create.body).unwrap();
    assert!(body["data"].get("id").is_none());
}

#[tokio::test]
async fn crud_add_failure_leaves_collection_unchanged() {
    let (server, hub) = setup_anonymous().await;
    mount_public_packages(&server).await;
    hub.bootstrap().await;

    Mock::given(method("POST"))
        .and(query_param("action", "crud"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "error": "validation" })),
        )
        .mount(&server)
        .await;

    let before = hub.store().packages_snapshot();
    let added = hub
        .packages()
        .add(Package { title: "Rejected".into(), ..Package::default() })
        .await;

    assert!(!added);
    assert_eq!(*hub.store().packages_snapshot(), *before);
}

#[tokio::test]
async fn crud_update_replaces_matching_record_in_place() {
    let (server, hub) = setup_anonymous().await;
    mount_public_packages(&server).await;
    hub.bootstrap().await;

    Mock::given(method("POST"))
        .and(query_param("action", "crud"))
        .and(body_partial_json(json!({ "op": "update" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let updated = hub
        .packages()
        .update(Package { id: "P1".into(), title: "Alpha v2".into(), ..Package::default() })
        .await;

    assert!(updated);
    assert_eq!(package_ids(&hub), ["P1", "P2"], "order and length unchanged");
    assert_eq!(hub.store().package_by_id("P1").unwrap().title, "Alpha v2");
    assert_eq!(hub.store().package_by_id("P2").unwrap().title, "Beta");
}

#[tokio::test]
async fn crud_update_failure_is_a_local_noop() {
    let (server, hub) = setup_anonymous().await;
    mount_public_packages(&server).await;
    hub.bootstrap().await;

    // Transport-level failure this time: backend answers 500.
    Mock::given(method("POST"))
        .and(query_param("action", "crud"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "down" })))
        .mount(&server)
        .await;

    let updated = hub
        .packages()
        .update(Package { id: "P1".into(), title: "Never".into(), ..Package::default() })
        .await;

    assert!(!updated);
    assert_eq!(hub.store().package_by_id("P1").unwrap().title, "Alpha");
}

#[tokio::test]
async fn crud_remove_is_idempotent_against_an_already_gone_record() {
    let (server, hub) = setup_anonymous().await;
    mount_public_packages(&server).await;
    hub.bootstrap().await;

    // First delete confirms; the second reports failure (already gone).
    Mock::given(method("POST"))
        .and(query_param("action", "crud"))
        .and(body_partial_json(json!({ "op": "delete", "id": "P1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(query_param("action", "crud"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "error": "not found" })),
        )
        .mount(&server)
        .await;

    assert!(hub.packages().remove("P1").await);
    let after_first = package_ids(&hub);
    assert_eq!(after_first, ["P2"], "exactly one record removed");

    assert!(!hub.packages().remove("P1").await);
    assert_eq!(package_ids(&hub), after_first, "second remove changes nothing");
}

// ── Domain actions ──────────────────────────────────────────────────

#[tokio::test]
async fn add_booking_notifies_without_local_append() {
    let (server, hub) = setup_anonymous().await;

    Mock::given(method("POST"))
        .and(query_param("action", "create_booking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let mut notifications = hub.notifications();
    let booking = NewBooking {
        name: "Asha".into(),
        email: "asha@example.com".into(),
        ..NewBooking::default()
    };

    assert!(hub.add_booking(booking.clone()).await);
    assert_eq!(notifications.recv().await.unwrap(), Notification::Booking(booking));
    // Bookings are only visible after an admin re-fetch.
    assert!(hub.store().bookings_snapshot().is_empty());
}

#[tokio::test]
async fn add_subscriber_notifies_and_leaves_collection_untouched() {
    let (server, hub) = setup_anonymous().await;

    Mock::given(method("POST"))
        .and(query_param("action", "add_subscriber"))
        .and(body_partial_json(json!({ "email": "a@b.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let mut notifications = hub.notifications();

    assert!(hub.add_subscriber("a@b.com").await);
    assert_eq!(
        notifications.recv().await.unwrap(),
        Notification::Subscriber { email: "a@b.com".into() }
    );
    assert!(hub.store().subscribers_snapshot().is_empty());
}

#[tokio::test]
async fn failed_subscription_emits_no_notification() {
    let (_server, hub) = setup_anonymous().await;

    let mut notifications = hub.notifications();

    assert!(!hub.add_subscriber("a@b.com").await);
    assert!(matches!(
        notifications.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));
}

#[tokio::test]
async fn update_booking_status_patches_only_the_status_field() {
    let tokens = Arc::new(MemoryTokenStore::with_token("admin-token"));
    let (server, hub) = setup(tokens).await;

    Mock::given(method("GET"))
        .and(query_param("action", "get_all_data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("action", "get_admin_data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookings": [
                { "id": "B1", "name": "Asha", "email": "asha@example.com",
                  "status": "pending", "date": "2026-08-01" },
                { "id": "B2", "name": "Brian", "email": "brian@example.com",
                  "status": "pending" },
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(query_param("action", "crud"))
        .and(body_partial_json(json!({
            "table": "bookings", "op": "update", "data": { "id": "B1", "status": "confirmed" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    hub.bootstrap().await;
    assert!(hub.update_booking_status("B1", BookingStatus::Confirmed).await);

    let b1 = hub.store().booking_by_id("B1").unwrap();
    assert_eq!(b1.status, BookingStatus::Confirmed);
    assert_eq!(b1.name, "Asha", "other fields untouched");
    assert_eq!(b1.date.as_deref(), Some("2026-08-01"));

    let b2 = hub.store().booking_by_id("B2").unwrap();
    assert_eq!(b2.status, BookingStatus::Pending, "other bookings untouched");
}

#[tokio::test]
async fn update_settings_replaces_the_singleton_only_on_success() {
    let (server, hub) = setup_anonymous().await;

    Mock::given(method("POST"))
        .and(query_param("action", "update_settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(query_param("action", "update_settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let first = SiteSettings { site_name: "Savannah Trails".into(), ..SiteSettings::default() };
    assert!(hub.update_settings(first).await);
    assert_eq!(hub.store().settings().site_name, "Savannah Trails");

    let second = SiteSettings { site_name: "Never Lands".into(), ..SiteSettings::default() };
    assert!(!hub.update_settings(second).await);
    assert_eq!(hub.store().settings().site_name, "Savannah Trails");
}

#[tokio::test]
async fn check_ai_usage_defaults_to_denied_when_unreachable() {
    let (server, hub) = setup_anonymous().await;

    Mock::given(method("GET"))
        .and(query_param("action", "check_ai_usage"))
        .and(query_param("email", "a@b.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "allowed": true })))
        .mount(&server)
        .await;

    assert!(hub.check_ai_usage("a@b.com").await);

    // Unmatched email falls through to the mock server's 404.
    assert!(!hub.check_ai_usage("other@b.com").await);
}

#[tokio::test]
async fn save_generated_plan_is_fire_and_forget() {
    let (server, hub) = setup_anonymous().await;

    Mock::given(method("POST"))
        .and(query_param("action", "save_plan"))
        .and(body_partial_json(json!({ "email": "a@b.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let request = wayfarer_core::TripPlanRequest {
        destination: "Zanzibar".into(),
        days: 5,
        ..wayfarer_core::TripPlanRequest::default()
    };
    let response = wayfarer_core::ItineraryResponse::offline("test");

    assert!(hub.save_generated_plan("a@b.com", &request, &response).await);
    assert!(hub.store().generated_plans_snapshot().is_empty(), "no local mirroring");
}
