//! Request routing dispatch module
//!
//! Hyper entry point: adapts incoming HTTP requests onto the companion
//! dispatcher and the dispatcher's result back onto the wire. Transport
//! concerns (preflight, health probes, body-size limit) are short-circuited
//! here; everything else is the dispatcher's business.

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::companion::{self, CompanionRequest};
use crate::config::AppState;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let access_log = state.access_log();
    if access_log {
        logger::log_request(&method, req.uri(), req.version());
    }

    // 1. CORS preflight never reaches the dispatcher
    if method == Method::OPTIONS {
        return Ok(http::build_options_response());
    }

    // 2. Health probes
    let health = &state.config.routes.health;
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        return Ok(http::build_health_response("ok"));
    }

    // 3. Body size guard
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 4. Collect the body and hand over to the dispatcher
    let body = read_body(req).await;
    let request = CompanionRequest::new(path.clone(), method.as_str(), body);
    let response = companion::dispatch(&request);

    if access_log {
        logger::log_response(&path, response.body.len());
    }

    Ok(http::from_dispatch(response))
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(req: &Request<Incoming>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Collect the request body as text.
///
/// Read failures degrade to an absent body (the dispatcher then applies its
/// defaults); nothing here ever turns into an error response.
async fn read_body(req: Request<Incoming>) -> Option<String> {
    match req.collect().await {
        Ok(collected) => {
            let bytes = collected.to_bytes();
            if bytes.is_empty() {
                None
            } else {
                Some(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            None
        }
    }
}
