//! Supportive chat handler
//!
//! Picks an empathetic reply template by keyword group, first match wins,
//! and attaches the fixed support-resource list.

use serde::Serialize;
use serde_json::Value;

/// Crisis lifelines attached to every chat reply, matched or not
const SUPPORT_RESOURCES: [&str; 3] = [
    "National Suicide Prevention Lifeline: 988",
    "Crisis Text Line: Text HOME to 741741",
    "NAMI Support: 1-800-950-NAMI",
];

/// Chat response payload
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub user_message: String,
    pub luna_response: String,
    pub support_resources: &'static [&'static str],
}

/// Build the reply text for a message.
///
/// Keyword groups are checked in priority order: sadness, anxiety, mania,
/// medication, then the generic fallback. Matching is a case-folded
/// substring scan, same semantics as crisis detection.
pub fn reply(message: &str, name: &str) -> String {
    let lower = message.to_lowercase();

    if lower.contains("sad") || lower.contains("depressed") {
        format!(
            "I hear that you're feeling sad, {name}. Those feelings are valid, and it's okay to have difficult days. What's one small thing that might bring you a tiny bit of comfort right now?"
        )
    } else if lower.contains("anxious") || lower.contains("worried") {
        format!(
            "Anxiety can feel overwhelming, {name}. Let's take this one breath at a time. Try breathing in for 4 counts, holding for 4, and breathing out for 6. I'm here with you."
        )
    } else if lower.contains("manic") || lower.contains("hyper") {
        format!(
            "It sounds like you have a lot of energy right now, {name}. Let's channel that energy safely. Have you been sleeping well? Sometimes slowing down can help us think more clearly."
        )
    } else if lower.contains("medication") {
        format!(
            "Medication is an important part of managing bipolar disorder, {name}. If you're having concerns about your medication, please discuss them with your doctor. I'm here to support you through the process."
        )
    } else {
        format!(
            "Thank you for sharing with me, {name}. I'm listening and I care about how you're feeling. Remember, you're not alone in this journey. What would be most helpful for you right now?"
        )
    }
}

/// Handle a `/chat` request body
pub fn handle(body: &Value) -> ChatReply {
    let message = body.get("message").and_then(Value::as_str).unwrap_or("");
    let name = body.get("name").and_then(Value::as_str).unwrap_or("friend");

    ChatReply {
        user_message: message.to_string(),
        luna_response: reply(message, name),
        support_resources: &SUPPORT_RESOURCES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sadness_reply() {
        let text = reply("I feel so sad today", "Sam");
        assert!(text.contains("Sam"));
        assert!(text.contains("feeling sad"));
    }

    #[test]
    fn test_anxiety_reply() {
        let text = reply("really worried about tomorrow", "Sam");
        assert!(text.contains("Anxiety"));
    }

    #[test]
    fn test_mania_reply() {
        let text = reply("feeling kind of hyper", "Sam");
        assert!(text.contains("a lot of energy"));
    }

    #[test]
    fn test_medication_reply() {
        let text = reply("should I change my medication?", "Sam");
        assert!(text.contains("Medication"));
    }

    #[test]
    fn test_sadness_outranks_anxiety() {
        // "sad" group is checked first
        let text = reply("sad and anxious at once", "Sam");
        assert!(text.contains("feeling sad"));
    }

    #[test]
    fn test_generic_fallback_mentions_name() {
        let text = reply("what's the weather like", "Robin");
        assert!(text.contains("Robin"));
        assert!(text.contains("not alone"));
    }

    #[test]
    fn test_matching_is_case_folded() {
        let text = reply("SO SAD", "Sam");
        assert!(text.contains("feeling sad"));
    }

    #[test]
    fn test_handle_echoes_message_and_attaches_resources() {
        let body = json!({"message": "hello there", "name": "Sam"});
        let chat = handle(&body);
        assert_eq!(chat.user_message, "hello there");
        assert_eq!(chat.support_resources.len(), 3);
        assert!(chat.support_resources[0].contains("988"));
    }

    #[test]
    fn test_handle_defaults() {
        let chat = handle(&json!({}));
        assert_eq!(chat.user_message, "");
        assert!(chat.luna_response.contains("friend"));
    }
}
