use axum::http::{HeaderMap, HeaderName};

const X_REQUEST_ID: &str = "x-request-id";

/// Header carrying the per-request id.
#[must_use]
pub fn header() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Request id assigned by the gateway, if the header is present and printable.
#[must_use]
pub fn from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}
