//! Seeded catalog data for mock mode.
//!
//! One demo account plus the studio's standing catalog. Locally
//! registered users and bookings are merged in from the vault at call
//! time; this module is static data only.

use glowbook_core::catalog::{Feedback, MediaItem, MediaKind, Offer, Service, ServiceCategory};
use glowbook_core::user::{LocalAccount, User};

/// PIN for the seeded demo account.
pub const DEMO_PIN: &str = "0000";

/// The demo account available on every fresh install (7997037993 / 0000).
pub fn demo_account() -> LocalAccount {
    LocalAccount {
        user: User {
            id: "u1".to_string(),
            name: "Demo User".to_string(),
            mobile_number: "7997037993".to_string(),
            avatar_url: None,
            date_registered: Some("2025-11-02T09:30:00+00:00".to_string()),
        },
        pin: DEMO_PIN.to_string(),
    }
}

/// The studio's service catalog.
pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "s1".to_string(),
            title: "Bridal Makeup".to_string(),
            category: ServiceCategory::Makeup,
            duration_min: 120,
            price: 8000,
            thumbnail_url: Some("https://picsum.photos/seed/glow-s1/400/300".to_string()),
            description: Some(
                "Full bridal look with HD airbrush finish, lashes and hairstyling trial."
                    .to_string(),
            ),
            artist_id: Some("a1".to_string()),
        },
        Service {
            id: "s2".to_string(),
            title: "Party Glam".to_string(),
            category: ServiceCategory::Makeup,
            duration_min: 60,
            price: 2500,
            thumbnail_url: Some("https://picsum.photos/seed/glow-s2/400/300".to_string()),
            description: Some("Evening-ready glam with lashes included.".to_string()),
            artist_id: Some("a1".to_string()),
        },
        Service {
            id: "s3".to_string(),
            title: "Hydra Facial".to_string(),
            category: ServiceCategory::Skincare,
            duration_min: 75,
            price: 3500,
            thumbnail_url: Some("https://picsum.photos/seed/glow-s3/400/300".to_string()),
            description: Some("Deep-cleansing facial with serum infusion.".to_string()),
            artist_id: None,
        },
        Service {
            id: "s4".to_string(),
            title: "Hair Styling".to_string(),
            category: ServiceCategory::Hair,
            duration_min: 45,
            price: 1500,
            thumbnail_url: Some("https://picsum.photos/seed/glow-s4/400/300".to_string()),
            description: None,
            artist_id: None,
        },
        Service {
            id: "s5".to_string(),
            title: "Keratin Treatment".to_string(),
            category: ServiceCategory::Hair,
            duration_min: 90,
            price: 4500,
            thumbnail_url: Some("https://picsum.photos/seed/glow-s5/400/300".to_string()),
            description: Some("Smoothing treatment for frizz-free hair.".to_string()),
            artist_id: None,
        },
        Service {
            id: "s6".to_string(),
            title: "Classic Manicure".to_string(),
            category: ServiceCategory::Nails,
            duration_min: 40,
            price: 800,
            thumbnail_url: Some("https://picsum.photos/seed/glow-s6/400/300".to_string()),
            description: None,
            artist_id: None,
        },
        Service {
            id: "s7".to_string(),
            title: "Gel Nail Art".to_string(),
            category: ServiceCategory::Nails,
            duration_min: 60,
            price: 1200,
            thumbnail_url: Some("https://picsum.photos/seed/glow-s7/400/300".to_string()),
            description: None,
            artist_id: None,
        },
        Service {
            id: "s8".to_string(),
            title: "Saree Draping".to_string(),
            category: ServiceCategory::Other,
            duration_min: 30,
            price: 600,
            thumbnail_url: Some("https://picsum.photos/seed/glow-s8/400/300".to_string()),
            description: None,
            artist_id: None,
        },
    ]
}

/// Current promotional offers.
pub fn offers() -> Vec<Offer> {
    vec![
        Offer {
            id: "o1".to_string(),
            title: "Bridal Season Special".to_string(),
            description: "20% off bridal makeup packages booked this month.".to_string(),
            discount_percent: 20,
            service_id: "s1".to_string(),
        },
        Offer {
            id: "o2".to_string(),
            title: "First Visit Facial".to_string(),
            description: "15% off your first Hydra Facial.".to_string(),
            discount_percent: 15,
            service_id: "s3".to_string(),
        },
    ]
}

/// Previous-work gallery entries.
pub fn previous_work() -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: "m1".to_string(),
            kind: MediaKind::Image,
            url: "https://picsum.photos/seed/glow-m1/600/800".to_string(),
        },
        MediaItem {
            id: "m2".to_string(),
            kind: MediaKind::Image,
            url: "https://picsum.photos/seed/glow-m2/600/800".to_string(),
        },
        MediaItem {
            id: "m3".to_string(),
            kind: MediaKind::Video,
            url: "https://media.glowbook.example/gallery/m3.mp4".to_string(),
        },
        MediaItem {
            id: "m4".to_string(),
            kind: MediaKind::Image,
            url: "https://picsum.photos/seed/glow-m4/600/800".to_string(),
        },
        MediaItem {
            id: "m5".to_string(),
            kind: MediaKind::Image,
            url: "https://picsum.photos/seed/glow-m5/600/800".to_string(),
        },
        MediaItem {
            id: "m6".to_string(),
            kind: MediaKind::Video,
            url: "https://media.glowbook.example/gallery/m6.mp4".to_string(),
        },
    ]
}

/// Customer feedback shown on the home screen.
pub fn feedbacks() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "f1".to_string(),
            name: "Aishwarya".to_string(),
            text: "Loved my bridal look, the team was so patient with every detail."
                .to_string(),
        },
        Feedback {
            id: "f2".to_string(),
            name: "Sneha".to_string(),
            text: "Hydra facial left my skin glowing for weeks. Highly recommend."
                .to_string(),
        },
        Feedback {
            id: "f3".to_string(),
            name: "Pooja".to_string(),
            text: "Quick party glam before an event, on time and gorgeous.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let services = services();
        let mut ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), services.len());
    }

    #[test]
    fn test_offers_reference_seeded_services() {
        let service_ids: Vec<String> = services().into_iter().map(|s| s.id).collect();
        for offer in offers() {
            assert!(service_ids.contains(&offer.service_id));
        }
    }

    #[test]
    fn test_demo_account_is_well_formed() {
        let account = demo_account();
        assert_eq!(account.user.mobile_number.len(), 10);
        assert_eq!(account.pin, DEMO_PIN);
    }
}
