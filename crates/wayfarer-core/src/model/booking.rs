// ── Bookings, subscribers, and persisted AI plans ──
//
// Admin-side collections. Bookings and subscribers are created from the
// public site but only ever listed in the admin console.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::impl_record;

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// A trip booking as stored by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    /// Backend-assigned submission date, passed through untouched.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A booking request from the public site. The backend assigns `id`,
/// `date`, and the initial status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    pub travel_date: Option<String>,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A newsletter subscriber.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subscriber {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A persisted AI itinerary request/response pair.
///
/// The pair is opaque to this layer: saved and listed, never
/// interpreted beyond the identifier and requester email.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedPlan {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub request: Value,
    #[serde(default)]
    pub response: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_record!(Booking, "bookings");
impl_record!(Subscriber, "subscribers");
impl_record!(GeneratedPlan, "generated_plans");
