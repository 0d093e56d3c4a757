//! Catalog types: services, offers, gallery media, customer feedback.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Treatment category shown as a filter chip in the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum ServiceCategory {
    Makeup,
    Skincare,
    Hair,
    Nails,
    Other,
}

/// A bookable service offered by the studio.
///
/// Wire payloads arrive camelCase from some backends; serde aliases keep
/// deserialization tolerant while the canonical form stays snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub category: ServiceCategory,
    /// Appointment length in minutes
    #[serde(alias = "durationMin")]
    pub duration_min: u32,
    /// Price in whole rupees
    pub price: u32,
    #[serde(default, alias = "thumbnailUrl", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Artist assigned to perform this service, if the studio routes by artist
    #[serde(default, alias = "artistId", skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
}

/// A promotional discount attached to a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "discountPercent")]
    pub discount_percent: u32,
    #[serde(alias = "serviceId")]
    pub service_id: String,
}

/// Kind of a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A previous-work gallery entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

/// A customer testimonial shown on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub name: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_accepts_camel_case_payload() {
        let json = r#"{
            "id": "s1",
            "title": "Bridal Makeup",
            "category": "Makeup",
            "durationMin": 120,
            "price": 8000,
            "thumbnailUrl": "https://cdn.glowbook.example/s1.jpg"
        }"#;

        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.duration_min, 120);
        assert_eq!(service.category, ServiceCategory::Makeup);
        assert_eq!(
            service.thumbnail_url.as_deref(),
            Some("https://cdn.glowbook.example/s1.jpg")
        );
        assert!(service.artist_id.is_none());
    }

    #[test]
    fn test_media_kind_wire_form_is_lowercase() {
        let item = MediaItem {
            id: "m1".to_string(),
            kind: MediaKind::Video,
            url: "https://cdn.glowbook.example/m1.mp4".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "video");

        let back: MediaItem = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind, MediaKind::Video);
    }

    #[test]
    fn test_category_display_matches_wire_name() {
        assert_eq!(ServiceCategory::Skincare.to_string(), "Skincare");
        assert_eq!(
            "Hair".parse::<ServiceCategory>().unwrap(),
            ServiceCategory::Hair
        );
    }
}
