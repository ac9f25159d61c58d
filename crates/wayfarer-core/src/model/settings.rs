// ── Site-wide settings singleton ──
//
// One record, no identifier. Initialized to hardcoded defaults,
// replaced wholesale by the backend payload when it carries a non-empty
// site name, replaced wholesale again on every confirmed update.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::AiProvider;

/// Search-engine metadata for the public site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeoSettings {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
}

/// Site-wide configuration: branding, contact info, SEO, and provider
/// selection. Provider credentials and page copy the client never reads
/// ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_name: String,
    pub logo: String,
    pub favicon: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub whatsapp: String,
    pub seo: SeoSettings,
    pub ai_provider: AiProvider,
    pub admin_email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Wayfarer Travel".into(),
            logo: "/assets/wayfarer-logo.png".into(),
            favicon: "/assets/wayfarer-logo.png".into(),
            phone: "+254 700 000 000".into(),
            email: "hello@wayfarer.example".into(),
            address: "Nairobi, Kenya".into(),
            whatsapp: "+254 700 000 000".into(),
            seo: SeoSettings {
                title: "Wayfarer Travel | Your Journey, Your Story".into(),
                description: "Curated adventures, authentic cultures, and \
                              unforgettable memories around the globe."
                    .into(),
                keywords: "travel, adventure, tours, destinations".into(),
            },
            ai_provider: AiProvider::Gemini,
            admin_email: "admin@wayfarer.example".into(),
            extra: Map::new(),
        }
    }
}

impl SiteSettings {
    /// Whether a backend payload should replace the current settings.
    /// An empty site name marks a placeholder row, not real data.
    pub fn is_populated(&self) -> bool {
        !self.site_name.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn partial_payload_merges_over_defaults() {
        let settings: SiteSettings = serde_json::from_value(json!({
            "siteName": "Savannah Trails",
            "phone": "+254 711 111 111",
        }))
        .unwrap();

        assert_eq!(settings.site_name, "Savannah Trails");
        assert_eq!(settings.phone, "+254 711 111 111");
        // Unspecified fields keep the hardcoded defaults.
        assert_eq!(settings.email, "hello@wayfarer.example");
        assert!(settings.is_populated());
    }

    #[test]
    fn empty_site_name_is_not_populated() {
        let settings: SiteSettings = serde_json::from_value(json!({ "siteName": "" })).unwrap();
        assert!(!settings.is_populated());
    }
}
