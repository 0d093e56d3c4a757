//! OTP flow payloads.
//!
//! The flow has three steps: request a code for a mobile number, verify
//! the code, then complete registration carrying the verification token.
//! Challenge state (codes, expiry, issued tokens) lives with the API
//! implementation; these are only the shapes that cross its boundary.

use serde::{Deserialize, Serialize};

/// Acknowledgement that an OTP was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpRequested {
    /// Seconds until the code expires, when the backend reports it
    #[serde(default, alias = "expiresIn", skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Some backends hand out the challenge token at request time
    #[serde(default, alias = "otpToken", skip_serializing_if = "Option::is_none")]
    pub otp_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of checking a code against the live challenge.
///
/// Verification failures (wrong code, expired challenge) are reported in
/// the payload rather than as errors, so callers can drive retry UI from
/// one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpVerification {
    pub verified: bool,
    /// Single-use token proving this mobile number was verified.
    /// Backends spell this `otpToken`, `otp_token`, or plain `token`.
    #[serde(
        default,
        alias = "otpToken",
        alias = "token",
        skip_serializing_if = "Option::is_none"
    )]
    pub otp_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Input for completing an OTP-backed registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpRegistration {
    pub name: String,
    pub mobile_number: String,
    pub pin: String,
    /// The code the customer typed
    pub code: String,
    /// Token returned by a prior successful verification, if the caller
    /// kept it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp_token: Option<String>,
}
