//! Crisis detection handler
//!
//! Scans a case-folded message for fixed manic and depressive keyword sets
//! and returns the matching intervention plan.
//!
//! The scan is a raw substring search with no word-boundary awareness, so
//! e.g. "scant sleep" contains "cant sleep" and triggers a match. That is
//! the published contract of this endpoint; do not change it to
//! boundary-aware matching without versioning the API.

use serde::Serialize;
use serde_json::Value;

const MANIC_KEYWORDS: [&str; 5] = [
    "cant sleep",
    "invincible",
    "spending spree",
    "racing thoughts",
    "dont need sleep",
];

const DEPRESSIVE_KEYWORDS: [&str; 5] = [
    "want to die",
    "hurt myself",
    "hopeless",
    "worthless",
    "cant go on",
];

/// Crisis classification labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisType {
    ManicEpisode,
    DepressiveEpisode,
}

/// Immediate intervention plan. The second field differs by episode type:
/// manic gets a grounding technique, depressive a comfort reminder.
#[derive(Debug, Serialize)]
pub struct Intervention {
    pub immediate_steps: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_technique: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort_reminder: Option<&'static str>,
}

/// Crisis response payload. The detected and all-clear shapes share only
/// the `crisis_detected` flag, so this is a two-variant untagged enum.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CrisisReport {
    Detected {
        crisis_detected: bool,
        crisis_type: CrisisType,
        immediate_support: Intervention,
        emergency_contacts: &'static str,
        luna_message: &'static str,
    },
    Clear {
        crisis_detected: bool,
        luna_message: &'static str,
    },
}

/// Scan a case-folded message for crisis keywords.
///
/// The manic set is checked first; when a message contains keywords from
/// both sets the result is `ManicEpisode`.
pub fn detect_crisis(message: &str) -> Option<CrisisType> {
    if MANIC_KEYWORDS.iter().any(|kw| message.contains(kw)) {
        Some(CrisisType::ManicEpisode)
    } else if DEPRESSIVE_KEYWORDS.iter().any(|kw| message.contains(kw)) {
        Some(CrisisType::DepressiveEpisode)
    } else {
        None
    }
}

/// Intervention plan per crisis type
const fn intervention(crisis_type: CrisisType) -> Intervention {
    match crisis_type {
        CrisisType::ManicEpisode => Intervention {
            immediate_steps: &[
                "Find a quiet, calm space",
                "Call your psychiatrist or crisis line",
                "Avoid making major decisions",
                "Ask someone trusted to stay with you",
            ],
            grounding_technique: Some(
                "Try the 5-4-3-2-1 technique: Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
            ),
            comfort_reminder: None,
        },
        CrisisType::DepressiveEpisode => Intervention {
            immediate_steps: &[
                "Call 988 (Suicide & Crisis Lifeline)",
                "Reach out to a trusted friend or family member",
                "Go to your nearest emergency room if needed",
                "Remove any harmful objects from your vicinity",
            ],
            grounding_technique: None,
            comfort_reminder: Some(
                "These intense feelings will pass. You matter, and help is available.",
            ),
        },
    }
}

/// Handle a `/crisis` request body.
///
/// `crisis_indicators` is accepted in the body but plays no part in
/// classification; only the free-text `message` is scanned.
pub fn handle(body: &Value) -> CrisisReport {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_lowercase();

    match detect_crisis(&message) {
        Some(crisis_type) => CrisisReport::Detected {
            crisis_detected: true,
            crisis_type,
            immediate_support: intervention(crisis_type),
            emergency_contacts: "988 Suicide & Crisis Lifeline",
            luna_message: "I'm here with you. You're not alone. Let's get through this together.",
        },
        None => CrisisReport::Clear {
            crisis_detected: false,
            luna_message: "I'm listening. How can I support you today?",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manic_keywords() {
        assert_eq!(
            detect_crisis("i feel invincible"),
            Some(CrisisType::ManicEpisode)
        );
        assert_eq!(
            detect_crisis("racing thoughts all night"),
            Some(CrisisType::ManicEpisode)
        );
    }

    #[test]
    fn test_depressive_keywords() {
        assert_eq!(
            detect_crisis("i feel hopeless"),
            Some(CrisisType::DepressiveEpisode)
        );
        assert_eq!(
            detect_crisis("i am worthless"),
            Some(CrisisType::DepressiveEpisode)
        );
    }

    #[test]
    fn test_manic_checked_before_depressive() {
        // Both sets present: manic wins
        assert_eq!(
            detect_crisis("cant sleep and feel hopeless"),
            Some(CrisisType::ManicEpisode)
        );
    }

    #[test]
    fn test_no_crisis() {
        assert_eq!(detect_crisis("i'm doing okay"), None);
        assert_eq!(detect_crisis(""), None);
    }

    #[test]
    fn test_apostrophe_defeats_keyword() {
        // "can't sleep" does not contain "cant sleep"; only the second
        // keyword fires here
        let report = handle(&json!({"message": "I can't sleep and feel invincible"}));
        match report {
            CrisisReport::Detected { crisis_type, .. } => {
                assert_eq!(crisis_type, CrisisType::ManicEpisode);
            }
            CrisisReport::Clear { .. } => panic!("expected crisis"),
        }
    }

    #[test]
    fn test_substring_false_positive_is_contractual() {
        // No word boundaries: "scant sleep" contains "cant sleep"
        assert_eq!(
            detect_crisis("scant sleep lately"),
            Some(CrisisType::ManicEpisode)
        );
    }

    #[test]
    fn test_handle_clear_shape() {
        let report = handle(&json!({"message": "I'm doing okay"}));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["crisis_detected"], json!(false));
        assert!(value.get("crisis_type").is_none());
    }

    #[test]
    fn test_handle_detected_shape() {
        let report = handle(&json!({"message": "I feel hopeless"}));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["crisis_detected"], json!(true));
        assert_eq!(value["crisis_type"], json!("depressive_episode"));
        assert_eq!(value["emergency_contacts"], json!("988 Suicide & Crisis Lifeline"));
        // Depressive interventions carry a comfort reminder, not a
        // grounding technique
        let support = &value["immediate_support"];
        assert!(support.get("comfort_reminder").is_some());
        assert!(support.get("grounding_technique").is_none());
        assert_eq!(support["immediate_steps"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_crisis_indicators_field_is_ignored() {
        let report = handle(&json!({
            "message": "all good",
            "crisis_indicators": ["hopeless", "cant sleep"]
        }));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["crisis_detected"], json!(false));
    }

    #[test]
    fn test_matching_is_case_folded() {
        let report = handle(&json!({"message": "RACING THOUGHTS"}));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["crisis_type"], json!("manic_episode"));
    }
}
