//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: request logging, method
//! validation, route matching and dispatch to the order endpoints.

use crate::config::AppState;
use crate::handler::orders;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

pub const ORDERS_PATH: &str = "/api/orders";
pub const SORT_PATH: &str = "/api/orders/sort";
pub const LIVENESS_PATH: &str = "/healthz";
pub const READINESS_PATH: &str = "/readyz";

/// Main entry point for HTTP request handling
///
/// Wraps routing with request/response logging and timing. The request body
/// is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    logger::log_request(req.method(), req.uri());

    let access_entry = state
        .config
        .logging
        .access_log
        .then(|| AccessLogEntry::from_request(&req, peer_addr));

    let mut response = route_request(&req, &state);
    http::apply_common_headers(&mut response, &state.config.http);

    let body_len = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
        .unwrap_or(usize::MAX);
    if *req.method() == Method::HEAD {
        response = http::strip_body(response, body_len);
    }

    let elapsed = started.elapsed();
    logger::log_response(response.status(), elapsed);
    if let Some(entry) = access_entry {
        let entry = entry.finish(response.status().as_u16(), body_len, elapsed);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return a response for anything but GET/HEAD
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path
fn route_request<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    if let Some(resp) = check_http_method(req.method(), state.config.http.enable_cors) {
        return resp;
    }

    let query = req.uri().query();
    match req.uri().path() {
        ORDERS_PATH => orders::filter(query, &state.orders),
        SORT_PATH => orders::sort(query, &state.orders),
        LIVENESS_PATH => {
            http::json_response(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
        }
        READINESS_PATH => http::json_response(
            StatusCode::OK,
            &serde_json::json!({ "status": "ready", "orders": state.orders.len() }),
        ),
        _ => http::build_404_response(),
    }
}
