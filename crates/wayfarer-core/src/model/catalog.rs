// ── Public catalog entities ──
//
// Everything the anonymous site renders: tour packages, destinations,
// services, rental cars, testimonials, FAQs, and blog posts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::impl_record;

/// A curated tour package.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Package {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A travel destination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An agency service offering (transfers, visas, charters, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceOffering {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A rental car listing. Fetched for display only; the admin console
/// has no car mutations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Car {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price_per_day: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_record!(Package, "packages");
impl_record!(Destination, "destinations");
impl_record!(ServiceOffering, "services");
impl_record!(Car, "cars");
impl_record!(Testimonial, "testimonials");
impl_record!(Faq, "faqs");
impl_record!(Post, "posts");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let package: Package = serde_json::from_value(json!({
            "id": "P1",
            "title": "Coastal Escape",
            "price": 499.0,
            "highlights": ["beach", "snorkeling"],
        }))
        .unwrap();

        assert_eq!(package.id, "P1");
        assert_eq!(package.extra["highlights"], json!(["beach", "snorkeling"]));

        let back = serde_json::to_value(&package).unwrap();
        assert_eq!(back["highlights"], json!(["beach", "snorkeling"]));
    }

    #[test]
    fn empty_id_is_omitted_when_serializing() {
        let faq = Faq {
            question: "Do you arrange visas?".into(),
            answer: "Yes.".into(),
            ..Faq::default()
        };

        let value = serde_json::to_value(&faq).unwrap();
        assert!(value.get("id").is_none(), "create payloads must not carry an id");
    }
}
