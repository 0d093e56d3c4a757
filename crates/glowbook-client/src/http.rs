//! HTTP request primitive and endpoint fallback resolver.
//!
//! `request_json` is the single transport path every remote call goes
//! through: URL joining, default headers, bearer-token injection, and
//! parse-tolerant body handling. `request_first_ok` layers endpoint
//! discovery on top, probing an ordered list of candidate paths until
//! one answers with something other than a 404.

use glowbook_core::{GlowbookError, Result, SessionVault};
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;

/// Request body accepted by the primitive.
pub enum RequestBody {
    /// Serialized as JSON with `Content-Type: application/json` unless
    /// the caller set a content type
    Json(Value),
    /// Passed through untouched so reqwest can set the multipart
    /// boundary itself
    Multipart(reqwest::multipart::Form),
}

/// Per-request options.
///
/// The method defaults to GET, or POST when a body is present. Headers
/// supplied here always win over the primitive's defaults.
#[derive(Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    /// When set, the stored session token (if any) is attached as a
    /// bearer Authorization header
    pub auth: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn with_multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    pub fn with_auth(mut self) -> Self {
        self.auth = true;
        self
    }

    /// Clones the options, or `None` when the body is multipart.
    ///
    /// Mirrors `reqwest::Request::try_clone`: multipart forms may wrap
    /// streams, so they cannot be replayed against another endpoint.
    pub fn try_clone(&self) -> Option<Self> {
        let body = match &self.body {
            None => None,
            Some(RequestBody::Json(value)) => Some(RequestBody::Json(value.clone())),
            Some(RequestBody::Multipart(_)) => return None,
        };
        Some(Self {
            method: self.method.clone(),
            headers: self.headers.clone(),
            body,
            auth: self.auth,
        })
    }

    fn resolved_method(&self) -> Method {
        match &self.method {
            Some(method) => method.clone(),
            None if self.body.is_some() => Method::POST,
            None => Method::GET,
        }
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(header, _)| header.eq_ignore_ascii_case(name))
    }
}

/// Joins a base URL and a path with exactly one slash between them.
///
/// Paths that already carry an `http://` or `https://` scheme are
/// returned as-is.
///
/// # Examples
///
/// ```
/// use glowbook_client::http::join_url;
///
/// assert_eq!(
///     join_url("https://api.example///", "services"),
///     "https://api.example/services"
/// );
/// assert_eq!(
///     join_url("https://api.example", "/services"),
///     "https://api.example/services"
/// );
/// ```
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The shared HTTP transport for remote mode.
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    vault: Arc<dyn SessionVault>,
}

impl HttpClient {
    /// Creates a client against the given base URL, reading tokens from
    /// the vault for authenticated requests.
    pub fn new(base_url: impl Into<String>, vault: Arc<dyn SessionVault>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            vault,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and returns the parsed response body.
    ///
    /// Body handling is deliberately tolerant: an empty body parses as
    /// `Value::Null` and malformed JSON degrades to the raw text as a
    /// `Value::String` instead of raising. Non-2xx responses become
    /// `GlowbookError::Api` carrying the status, a best-effort message,
    /// and the parsed body.
    pub async fn request_json(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let url = join_url(&self.base_url, path);
        let method = options.resolved_method();
        let mut request = self.client.request(method.clone(), &url);

        if !options.has_header("accept") {
            request = request.header(ACCEPT, "application/json");
        }

        if options.auth && !options.has_header("authorization") {
            if let Some(token) = self.vault.token().await? {
                request = request.bearer_auth(token);
            }
        }

        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        match options.body {
            Some(RequestBody::Json(ref value)) => {
                if !options.has_header("content-type") {
                    request = request.header(CONTENT_TYPE, "application/json");
                }
                request = request.body(serde_json::to_vec(value)?);
            }
            Some(RequestBody::Multipart(form)) => {
                request = request.multipart(form);
            }
            None => {}
        }

        tracing::debug!(%method, %url, "sending request");
        let response = request
            .send()
            .await
            .map_err(|e| GlowbookError::network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            GlowbookError::network(format!("Failed to read response from {}: {}", url, e))
        })?;
        let body = parse_body(&text);

        if !status.is_success() {
            let message = error_message(&body, status);
            tracing::debug!(%url, status = status.as_u16(), %message, "request rejected");
            return Err(GlowbookError::api(status.as_u16(), message, body));
        }

        Ok(body)
    }

    /// Tries candidate paths in order until one answers.
    ///
    /// A 404 advances to the next candidate; any other failure stops the
    /// search immediately. Exhausting the list raises
    /// `GlowbookError::NoEndpoint` wrapping the last 404.
    pub async fn request_first_ok(&self, paths: &[&str], options: RequestOptions) -> Result<Value> {
        let mut last: Option<GlowbookError> = None;

        for path in paths {
            let attempt = options.try_clone().ok_or_else(|| {
                GlowbookError::network(
                    "Multipart bodies cannot be replayed across candidate endpoints",
                )
            })?;

            match self.request_json(path, attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if err.status() == Some(404) => {
                    tracing::debug!(%path, "endpoint not found, trying next candidate");
                    last = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(GlowbookError::NoEndpoint {
            last: last.map(Box::new),
        })
    }
}

/// Empty bodies become `Null`; non-JSON text survives as a string.
fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Picks the most specific error message the response offers.
fn error_message(body: &Value, status: reqwest::StatusCode) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Request failed".to_string())
}
