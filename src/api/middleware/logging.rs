//! Per-request logging keyed by route and record id

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// What a request addresses, derived from the matched route
#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteTarget {
    route: String,
    resource: &'static str,
    record_id: Option<String>,
}

/// Log each request and its completion. Spans come from `TraceLayer`;
/// this middleware only emits events.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let target = route_target(route.as_deref(), request.uri().path());
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let record_id = target.record_id.as_deref().unwrap_or("-");

    info!(
        method = %method,
        route = %target.route,
        resource = target.resource,
        record_id,
        request_id = %request_id,
        headers = %redact_headers(&request),
        "Incoming request"
    );

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(
            method = %method,
            route = %target.route,
            record_id,
            status,
            duration_ms,
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            route = %target.route,
            resource = target.resource,
            record_id,
            status,
            duration_ms,
            request_id = %request_id,
            "Request completed"
        );
    }

    response
}

/// Unmatched paths log their raw path under resource `-`
fn route_target(route: Option<&str>, path: &str) -> RouteTarget {
    let Some(route) = route else {
        return RouteTarget {
            route: path.to_string(),
            resource: "-",
            record_id: None,
        };
    };

    let resource = match route {
        "/users" | "/register" | "/login" => "user",
        "/products" | "/product" => "product",
        r if r.starts_with("/user/") => "user",
        r if r.starts_with("/product/") => "product",
        _ => "-",
    };

    let record_id = route
        .ends_with("/{id}")
        .then(|| path.rsplit('/').next())
        .flatten()
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    RouteTarget {
        route: route.to_string(),
        resource,
        record_id,
    }
}

/// Content headers only; credentials are never written out
fn redact_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str();
            if is_sensitive_header(name) {
                return Some(format!("{}=[REDACTED]", name));
            }
            matches!(name, "content-type" | "content-length" | "user-agent")
                .then(|| format!("{}={}", name, value.to_str().unwrap_or("[invalid]")))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_sensitive_header(name: &str) -> bool {
    matches!(name, "authorization" | "cookie" | "proxy-authorization")
}
