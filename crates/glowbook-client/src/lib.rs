//! HTTP client for the Glowbook storefront: the request primitive, the
//! endpoint fallback resolver, wire-payload normalization, and the
//! remote `StorefrontApi` implementation.

pub mod endpoints;
pub mod http;
pub mod normalize;
pub mod remote;

pub use http::{HttpClient, RequestBody, RequestOptions};
pub use remote::RemoteApi;
