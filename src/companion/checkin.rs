//! Daily check-in handler
//!
//! Classifies a (mood score, sleep hours) snapshot into an episode-risk
//! bucket and builds the templated check-in report.

use serde::Serialize;
use serde_json::Value;

/// Episode-risk buckets, ordered by severity of the triggering condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    HighManicRisk,
    HighDepressiveRisk,
    ModerateRisk,
    Stable,
}

/// Check-in response payload
#[derive(Debug, Serialize)]
pub struct CheckinReport {
    pub message: String,
    pub mood_score: i64,
    pub sleep_hours: f64,
    pub risk_level: RiskLevel,
    pub recommendations: &'static [&'static str],
    pub next_checkin: &'static str,
    pub luna_says: String,
}

/// Classify episode risk from mood score and sleep hours.
///
/// Rules are checked in order; the first match wins. Elevated mood on very
/// little sleep outranks everything else.
pub fn episode_risk(mood_score: i64, sleep_hours: f64) -> RiskLevel {
    if mood_score >= 8 && sleep_hours <= 4.0 {
        RiskLevel::HighManicRisk
    } else if mood_score <= 2 && sleep_hours >= 10.0 {
        RiskLevel::HighDepressiveRisk
    } else if mood_score >= 7 || mood_score <= 3 {
        RiskLevel::ModerateRisk
    } else {
        RiskLevel::Stable
    }
}

/// Personalized check-in message for a risk level
fn checkin_message(name: &str, risk_level: RiskLevel) -> String {
    match risk_level {
        RiskLevel::HighManicRisk => format!(
            "Hi {name}, I notice your mood is very high with little sleep. This might be a manic episode starting. Please reach out to your doctor and try some grounding exercises."
        ),
        RiskLevel::HighDepressiveRisk => format!(
            "Hello {name}, I can see you're struggling today. Remember these feelings will pass. You're not alone, and I'm here to support you."
        ),
        RiskLevel::ModerateRisk => format!(
            "Hi {name}, I see some mood changes today. Let's focus on your self-care routine and coping strategies."
        ),
        RiskLevel::Stable => format!(
            "Good to see you, {name}! You're maintaining good stability. Keep up with your healthy routines."
        ),
    }
}

/// Fixed recommendation list per risk level
const fn recommendations(risk_level: RiskLevel) -> &'static [&'static str] {
    match risk_level {
        RiskLevel::HighManicRisk => &[
            "Contact your psychiatrist immediately",
            "Avoid major financial decisions",
            "Try grounding exercises (5-4-3-2-1 technique)",
            "Limit stimulation (dim lights, quiet environment)",
            "Ask a trusted friend to stay with you",
        ],
        RiskLevel::HighDepressiveRisk => &[
            "Reach out to your support network",
            "Try gentle physical activity (short walk)",
            "Practice deep breathing exercises",
            "Maintain regular meals",
            "Consider calling crisis hotline: 988",
        ],
        RiskLevel::ModerateRisk => &[
            "Monitor your mood closely",
            "Stick to your medication schedule",
            "Maintain regular sleep routine",
            "Practice mindfulness or meditation",
        ],
        RiskLevel::Stable => &[
            "Continue your current routine",
            "Keep tracking your mood daily",
            "Engage in activities you enjoy",
            "Stay connected with supportive people",
        ],
    }
}

/// Handle a `/checkin` request body. Missing or non-numeric fields fall back
/// to their defaults; nothing is validated beyond that.
pub fn handle(body: &Value) -> CheckinReport {
    let name = body.get("name").and_then(Value::as_str).unwrap_or("friend");
    let mood_score = body.get("mood_score").and_then(Value::as_i64).unwrap_or(5);
    let sleep_hours = body
        .get("sleep_hours")
        .and_then(Value::as_f64)
        .unwrap_or(7.0);

    let risk_level = episode_risk(mood_score, sleep_hours);

    CheckinReport {
        message: checkin_message(name, risk_level),
        mood_score,
        sleep_hours,
        risk_level,
        recommendations: recommendations(risk_level),
        next_checkin: "Tomorrow at the same time",
        luna_says: format!(
            "Thank you for checking in, {name}. I'm here whenever you need support."
        ),
    }
}
