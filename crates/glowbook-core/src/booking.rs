//! Booking types and appointment-slot helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Lifecycle state of a booking. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A confirmed-or-pending appointment for one or more services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(alias = "serviceIds")]
    pub service_ids: Vec<String>,
    #[serde(alias = "userId")]
    pub user_id: String,
    /// ISO 8601 start time chosen from the slot list
    #[serde(alias = "startTime")]
    pub start_time: String,
    pub status: BookingStatus,
}

impl Booking {
    /// Mints a new pending booking from a creation request.
    ///
    /// Ids are UUID-based rather than derived from list length, so they
    /// stay unique even after bookings are removed.
    pub fn pending(request: NewBooking) -> Self {
        Self {
            id: format!("b-{}", Uuid::new_v4()),
            service_ids: request.service_ids,
            user_id: request.user_id,
            start_time: request.start_time,
            status: BookingStatus::Pending,
        }
    }
}

/// Payload for creating a booking. Serialized camelCase for the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub service_ids: Vec<String>,
    pub user_id: String,
    pub start_time: String,
}

/// Returns the six bookable hourly slots for a date, starting at 11:00.
///
/// Slots are local-naive ISO 8601 strings; time-zone handling belongs to
/// the backend that confirms the booking.
pub fn booking_slots(date: NaiveDate) -> Vec<String> {
    (0..6)
        .map(|i| {
            // Hours 11..=16 are always valid.
            let slot = date.and_hms_opt(11 + i, 0, 0).unwrap();
            slot.format("%Y-%m-%dT%H:%M:%S").to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NewBooking {
        NewBooking {
            service_ids: vec!["s1".to_string(), "s3".to_string()],
            user_id: "u1".to_string(),
            start_time: "2026-09-01T11:00:00".to_string(),
        }
    }

    #[test]
    fn test_pending_booking_gets_uuid_id() {
        let a = Booking::pending(request());
        let b = Booking::pending(request());

        assert_eq!(a.status, BookingStatus::Pending);
        assert!(a.id.starts_with("b-"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.service_ids, vec!["s1", "s3"]);
    }

    #[test]
    fn test_status_wire_form_is_lowercase() {
        let json = serde_json::to_value(BookingStatus::Pending).unwrap();
        assert_eq!(json, "pending");

        let back: BookingStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, BookingStatus::Cancelled);
    }

    #[test]
    fn test_booking_accepts_camel_case_payload() {
        let json = r#"{
            "id": "b-1",
            "serviceIds": ["s1"],
            "userId": "u1",
            "startTime": "2026-09-01T12:00:00",
            "status": "confirmed"
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.user_id, "u1");
    }

    #[test]
    fn test_slots_are_six_hourly_from_eleven() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let slots = booking_slots(date);

        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0], "2026-09-01T11:00:00");
        assert_eq!(slots[5], "2026-09-01T16:00:00");
    }
}
