//! Security middleware for HTTP response headers

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Maximum request body size (100 KiB)
pub const MAX_BODY_SIZE: usize = 100 * 1024;

const SECURITY_HEADERS: &[(&str, &str)] = &[
    // Prevent MIME type sniffing
    ("x-content-type-options", "nosniff"),
    // Prevent clickjacking
    ("x-frame-options", "DENY"),
    ("referrer-policy", "no-referrer"),
    (
        "content-security-policy",
        "default-src 'none'; frame-ancestors 'none'",
    ),
    // Only effective over HTTPS
    (
        "strict-transport-security",
        "max-age=31536000; includeSubDomains",
    ),
    ("x-dns-prefetch-control", "off"),
    ("cross-origin-opener-policy", "same-origin"),
];

/// Middleware to add security headers to all responses
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for &(name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    // No caching by default
    if !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        );
    }

    response
}
