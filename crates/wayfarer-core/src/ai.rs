// ── AI proxy ──
//
// Passthrough to the backend's AI actions with one guarantee: callers
// always get a well-formed domain object, never an error. Failures of
// any kind collapse to a clearly labeled sentinel carrying the reason,
// so presentation code has exactly one shape to render.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use wayfarer_api::ApiClient;

use crate::model::{AiProvider, DestinationInsight, ItineraryResponse, TripPlanRequest};

#[derive(Serialize)]
struct PlanBody<'a> {
    provider: AiProvider,
    request: &'a TripPlanRequest,
}

#[derive(Serialize)]
struct InsightBody<'a> {
    provider: AiProvider,
    destination: &'a str,
}

/// Request a generated itinerary.
///
/// On any failure -- transport, backend-reported error, or an
/// undecodable body -- returns [`ItineraryResponse::offline`] with the
/// failure reason in the summary.
pub async fn generate_trip_plan(
    client: &ApiClient,
    request: &TripPlanRequest,
    provider: AiProvider,
) -> ItineraryResponse {
    let result = client
        .post("generate_trip_plan", &PlanBody { provider, request })
        .await;

    match decode(result) {
        Ok(plan) => plan,
        Err(reason) => {
            warn!(reason, "trip plan generation failed -- returning sentinel");
            ItineraryResponse::offline(reason)
        }
    }
}

/// Request markdown insights for a destination.
///
/// Same never-fails contract as [`generate_trip_plan`]; the sentinel is
/// [`DestinationInsight::unavailable`].
pub async fn destination_insights(
    client: &ApiClient,
    destination: &str,
    provider: AiProvider,
) -> DestinationInsight {
    let result = client
        .post("get_destination_insights", &InsightBody { provider, destination })
        .await;

    match decode(result) {
        Ok(insight) => insight,
        Err(reason) => {
            warn!(reason, "destination insights failed -- returning sentinel");
            DestinationInsight::unavailable()
        }
    }
}

/// Unwrap an AI response: a 2xx body may still carry `{ "error": ... }`
/// because the backend forwards provider failures inline.
fn decode<T: DeserializeOwned>(result: Result<Value, wayfarer_api::Error>) -> Result<T, String> {
    let value = result.map_err(|e| e.to_string())?;

    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(error.to_owned());
    }

    serde_json::from_value(value).map_err(|e| format!("unexpected AI response shape: {e}"))
}
