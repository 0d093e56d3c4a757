//! Candidate endpoint paths per operation.
//!
//! Backends for this storefront have shipped with different route
//! prefixes over time. Each operation lists its known shapes in
//! preference order; the fallback resolver walks them until one stops
//! answering 404. Keep the most likely current shape first.

/// `POST` login with `{phone, pin}`.
pub const LOGIN: &[&str] = &["/auth/login", "/login", "/api/auth/login", "/api/login"];

/// `POST` registration with `{name, phone, pin}` (plus OTP evidence when
/// completing an OTP flow).
pub const REGISTER: &[&str] = &[
    "/auth/register",
    "/register",
    "/api/auth/register",
    "/api/register",
];

/// `POST` with `{phone}`.
pub const SEND_OTP: &[&str] = &[
    "/auth/send-otp",
    "/auth/otp/send",
    "/otp/send",
    "/api/auth/send-otp",
];

/// `POST` with `{phone, code}`.
pub const VERIFY_OTP: &[&str] = &[
    "/auth/verify-otp",
    "/auth/otp/verify",
    "/otp/verify",
    "/api/auth/verify-otp",
];

/// Authenticated `GET` identity check.
pub const ME: &[&str] = &["/auth/me", "/me", "/api/auth/me", "/users/me"];

/// Authenticated `POST`, best-effort.
pub const LOGOUT: &[&str] = &["/auth/logout", "/logout", "/api/auth/logout"];

/// `GET` the service catalog.
pub const SERVICES: &[&str] = &["/services", "/api/services", "/catalog/services"];

/// `GET` current offers.
pub const OFFERS: &[&str] = &["/offers", "/api/offers", "/promotions"];

/// `GET` the previous-work gallery.
pub const PREVIOUS_WORK: &[&str] = &[
    "/media/previous-work",
    "/gallery",
    "/api/gallery",
    "/previous-work",
];

/// `GET` customer feedback.
pub const FEEDBACKS: &[&str] = &["/feedbacks", "/feedback", "/api/feedbacks", "/reviews"];

/// `POST` to create, `GET` to list.
pub const BOOKINGS: &[&str] = &["/bookings", "/api/bookings", "/appointments"];

/// Multipart avatar upload; single canonical path because multipart
/// bodies cannot be replayed across candidates.
pub const AVATAR: &str = "/users/me/avatar";

/// Candidate paths for one service by id.
pub fn service_paths(id: &str) -> Vec<String> {
    SERVICES
        .iter()
        .map(|base| format!("{}/{}", base, id))
        .collect()
}

/// Candidate paths for listing a user's bookings.
pub fn booking_list_paths(user_id: &str) -> Vec<String> {
    let mut paths: Vec<String> = BOOKINGS
        .iter()
        .map(|base| format!("{}?userId={}", base, user_id))
        .collect();
    paths.push(format!("/users/{}/bookings", user_id));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_is_nonempty_with_rooted_paths() {
        let tables = [
            LOGIN,
            REGISTER,
            SEND_OTP,
            VERIFY_OTP,
            ME,
            LOGOUT,
            SERVICES,
            OFFERS,
            PREVIOUS_WORK,
            FEEDBACKS,
            BOOKINGS,
        ];

        for table in tables {
            assert!(!table.is_empty());
            for path in table {
                assert!(path.starts_with('/'), "path {path} must be rooted");
            }
        }
    }

    #[test]
    fn test_dynamic_paths_embed_the_id() {
        assert_eq!(service_paths("s1")[0], "/services/s1");
        assert!(
            booking_list_paths("u1")
                .iter()
                .all(|path| path.contains("u1"))
        );
    }
}
