//! Mock backend: seeded data plus an in-process `StorefrontApi`.

mod api;
pub mod seed;

pub use api::{MockApi, OTP_CODE};
