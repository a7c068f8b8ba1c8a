//! Request dispatch module
//!
//! The transport-agnostic core of the service: takes a request descriptor,
//! routes it by exact path match to one of the four handlers, and returns a
//! response descriptor. Pure and synchronous; the hyper layer in
//! `crate::handler` is just an adapter around this function.

use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use super::{chat, checkin, crisis, mood};
use crate::logger;

/// Fixed header set applied to every response
pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// The four routed endpoints, in routing order
pub const ENDPOINTS: [&str; 4] = ["/checkin", "/mood", "/crisis", "/chat"];

/// Transport-agnostic request descriptor
#[derive(Debug, Clone)]
pub struct CompanionRequest {
    pub path: String,
    /// Carried for access logging only; routing never branches on it
    pub http_method: String,
    /// Raw body text, decoded as JSON before use
    pub body: Option<String>,
}

impl CompanionRequest {
    pub fn new(path: impl Into<String>, http_method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            path: path.into(),
            http_method: http_method.into(),
            body,
        }
    }
}

/// Transport-agnostic response descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionResponse {
    /// Always 200; the dispatcher has no failure path
    pub status_code: u16,
    pub headers: [(&'static str, &'static str); 4],
    /// JSON-encoded payload
    pub body: String,
}

/// Greeting returned for any path outside the routing table
#[derive(Debug, Serialize)]
struct Welcome {
    message: &'static str,
    available_endpoints: [&'static str; 4],
    timestamp: String,
}

/// Decode a raw request body as JSON.
///
/// An absent, empty, or undecodable body becomes an empty object so every
/// handler falls through to its field defaults. Decode failures are
/// swallowed by contract; nothing is surfaced to the caller.
fn parse_body(raw: Option<&str>) -> Value {
    match raw {
        Some(text) if !text.is_empty() => serde_json::from_str(text)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new())),
        _ => Value::Object(serde_json::Map::new()),
    }
}

/// Encode a handler payload into a response descriptor.
///
/// Serialization of these payload types cannot fail in practice; if it ever
/// does, the error is logged and an empty object body goes out instead of a
/// panic or a non-200 status.
fn create_response<T: Serialize>(status_code: u16, payload: &T) -> CompanionResponse {
    let body = serde_json::to_string(payload).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize response payload: {e}"));
        "{}".to_string()
    });

    CompanionResponse {
        status_code,
        headers: RESPONSE_HEADERS,
        body,
    }
}

fn welcome() -> Welcome {
    Welcome {
        message: "Hello! I'm LUNA - your AI companion for bipolar support.",
        available_endpoints: ENDPOINTS,
        timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    }
}

/// Route a request to its handler and build the response.
///
/// Exact path match only, method-agnostic. Unknown paths (including `/`)
/// get the greeting. Never fails, always status 200.
pub fn dispatch(request: &CompanionRequest) -> CompanionResponse {
    let body = parse_body(request.body.as_deref());

    match request.path.as_str() {
        "/checkin" => create_response(200, &checkin::handle(&body)),
        "/mood" => create_response(200, &mood::handle(&body)),
        "/crisis" => create_response(200, &crisis::handle(&body)),
        "/chat" => create_response(200, &chat::handle(&body)),
        _ => create_response(200, &welcome()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(path: &str, body: serde_json::Value) -> CompanionRequest {
        CompanionRequest::new(path, "POST", Some(body.to_string()))
    }

    fn body_of(response: &CompanionResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_unknown_path_gets_greeting() {
        let response = dispatch(&CompanionRequest::new("/foo", "GET", None));
        assert_eq!(response.status_code, 200);
        let body = body_of(&response);
        assert_eq!(
            body["available_endpoints"],
            json!(["/checkin", "/mood", "/crisis", "/chat"])
        );
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn test_root_path_gets_greeting() {
        let response = dispatch(&CompanionRequest::new("/", "GET", None));
        let body = body_of(&response);
        assert!(body.get("available_endpoints").is_some());
    }

    #[test]
    fn test_undecodable_body_uses_defaults() {
        let request =
            CompanionRequest::new("/checkin", "POST", Some("{not json at all".to_string()));
        let response = dispatch(&request);
        assert_eq!(response.status_code, 200);
        let body = body_of(&response);
        assert_eq!(body["mood_score"], json!(5));
        assert_eq!(body["risk_level"], json!("stable"));
    }

    #[test]
    fn test_checkin_route() {
        let response = dispatch(&post("/checkin", json!({"mood_score": 9, "sleep_hours": 3})));
        let body = body_of(&response);
        assert_eq!(body["risk_level"], json!("high_manic_risk"));
    }

    #[test]
    fn test_mood_route() {
        let response = dispatch(&post("/mood", json!({"mood_score": 2, "energy_level": 2})));
        let body = body_of(&response);
        assert_eq!(body["pattern_detected"], json!("possible_depression"));
    }

    #[test]
    fn test_crisis_route() {
        let response = dispatch(&post("/crisis", json!({"message": "I feel hopeless"})));
        let body = body_of(&response);
        assert_eq!(body["crisis_type"], json!("depressive_episode"));
    }

    #[test]
    fn test_chat_route() {
        let response = dispatch(&post("/chat", json!({"message": "I feel so sad today", "name": "Sam"})));
        let body = body_of(&response);
        assert!(body["luna_response"].as_str().unwrap().contains("Sam"));
    }

    #[test]
    fn test_method_is_ignored() {
        let get = dispatch(&CompanionRequest::new("/chat", "GET", None));
        let put = dispatch(&CompanionRequest::new("/chat", "PUT", None));
        assert_eq!(get.body, put.body);
    }

    #[test]
    fn test_fixed_headers_on_every_response() {
        for path in ["/checkin", "/mood", "/crisis", "/chat", "/nope"] {
            let response = dispatch(&CompanionRequest::new(path, "POST", None));
            assert_eq!(response.headers, RESPONSE_HEADERS);
            assert_eq!(response.status_code, 200);
        }
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        // Routed responses carry no timestamp and no randomness: identical
        // input must yield byte-identical output
        let request = post("/chat", json!({"message": "hello", "name": "Sam"}));
        let first = dispatch(&request);
        let second = dispatch(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_body_swallows_garbage() {
        assert_eq!(parse_body(Some("][")), json!({}));
        assert_eq!(parse_body(Some("")), json!({}));
        assert_eq!(parse_body(None), json!({}));
        assert_eq!(parse_body(Some(r#"{"a":1}"#)), json!({"a": 1}));
    }
}
