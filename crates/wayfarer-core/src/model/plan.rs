// ── AI itinerary types ──
//
// Request/response shapes for the backend's AI passthrough actions,
// plus the sentinel constructors the AI proxy returns on failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which remote AI provider the backend should call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAi,
}

/// Parameters for an itinerary request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripPlanRequest {
    pub destination: String,
    pub days: u32,
    #[serde(default)]
    pub travelers: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// One day of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

/// A structured itinerary from the AI backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponse {
    pub trip_title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub estimated_cost: String,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

impl ItineraryResponse {
    /// Title marking the sentinel returned on any AI failure.
    pub const OFFLINE_TITLE: &'static str = "AI Planner Offline";

    /// Sentinel itinerary returned when the AI backend cannot be
    /// reached or reports an error. Always well-formed; `summary`
    /// carries the human-readable reason.
    pub fn offline(reason: impl Into<String>) -> Self {
        Self {
            trip_title: Self::OFFLINE_TITLE.into(),
            summary: reason.into(),
            estimated_cost: "N/A".into(),
            itinerary: vec![ItineraryDay {
                day: 1,
                title: "Configuration Error".into(),
                activities: vec!["Could not connect to the AI service.".into()],
            }],
        }
    }

    /// Whether this is the offline sentinel rather than a real plan.
    pub fn is_offline(&self) -> bool {
        self.trip_title == Self::OFFLINE_TITLE
    }
}

/// Markdown insight content for a destination, with grounding sources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DestinationInsight {
    pub content: String,
    #[serde(default)]
    pub sources: Vec<Value>,
}

impl DestinationInsight {
    /// Sentinel insight returned when the AI backend is unavailable.
    pub fn unavailable() -> Self {
        Self {
            content: "## Error\nWe could not fetch live details at this moment. \
                      Please contact us directly for information."
                .into(),
            sources: Vec::new(),
        }
    }
}
