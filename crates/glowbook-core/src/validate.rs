//! Input validation and phone normalization rules.

use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static PIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// True for a 10-digit local mobile number.
pub fn is_valid_mobile(mobile_number: &str) -> bool {
    MOBILE_RE.is_match(mobile_number)
}

/// True for a 4-digit PIN.
pub fn is_valid_pin(pin: &str) -> bool {
    PIN_RE.is_match(pin)
}

/// Normalizes a phone number to international form for the wire.
///
/// Numbers already carrying a `+` prefix pass through unchanged; local
/// numbers gain the `+91` country code. Surrounding whitespace is
/// trimmed, nothing else is rewritten.
///
/// # Examples
///
/// ```
/// use glowbook_core::validate::normalize_phone;
///
/// assert_eq!(normalize_phone("9876543210"), "+919876543210");
/// assert_eq!(normalize_phone("+14155550100"), "+14155550100");
/// ```
pub fn normalize_phone(mobile_number: &str) -> String {
    let trimmed = mobile_number.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+91{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_must_be_ten_digits() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432101"));
        assert!(!is_valid_mobile("98765abc10"));
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn test_pin_must_be_four_digits() {
        assert!(is_valid_pin("1234"));
        assert!(!is_valid_pin("123"));
        assert!(!is_valid_pin("12345"));
        assert!(!is_valid_pin("12a4"));
    }

    #[test]
    fn test_normalize_adds_country_code_once() {
        assert_eq!(normalize_phone("9876543210"), "+919876543210");
        assert_eq!(normalize_phone(" 9876543210 "), "+919876543210");
        assert_eq!(normalize_phone("+919876543210"), "+919876543210");
    }
}
