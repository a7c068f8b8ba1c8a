//! Mood tracking handler
//!
//! Classifies a (mood, energy) pair into one of four fixed pattern labels
//! and attaches the matching insight and coping strategies.

use serde::Serialize;
use serde_json::Value;

/// Mood-pattern labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodPattern {
    PossibleHypomania,
    PossibleDepression,
    MoodFluctuation,
    StableMood,
}

/// Mood tracking response payload.
///
/// The request field is `mood_score` but it is echoed back as
/// `current_mood`; that asymmetry is part of the public contract.
#[derive(Debug, Serialize)]
pub struct MoodReport {
    pub current_mood: i64,
    pub energy_level: i64,
    pub pattern_detected: MoodPattern,
    pub luna_insight: &'static str,
    pub coping_strategies: &'static [&'static str],
}

/// Classify the mood pattern. Rules are ordered; first match wins.
pub fn detect_pattern(mood: i64, energy: i64) -> MoodPattern {
    if mood >= 7 && energy >= 7 {
        MoodPattern::PossibleHypomania
    } else if mood <= 3 && energy <= 3 {
        MoodPattern::PossibleDepression
    } else if (mood - 5).abs() >= 2 {
        MoodPattern::MoodFluctuation
    } else {
        MoodPattern::StableMood
    }
}

/// Fixed insight sentence per pattern
const fn insight(pattern: MoodPattern) -> &'static str {
    match pattern {
        MoodPattern::PossibleHypomania => {
            "Your elevated mood and energy might indicate a hypomanic phase. Stay mindful of your decisions and sleep schedule."
        }
        MoodPattern::PossibleDepression => {
            "Low mood and energy suggest you might be entering a depressive phase. Focus on basic self-care and reaching out for support."
        }
        MoodPattern::MoodFluctuation => {
            "I notice some mood changes. This is normal, but let's keep monitoring to identify any patterns."
        }
        MoodPattern::StableMood => {
            "Your mood appears stable today. This is great! Consistency in mood management is key."
        }
    }
}

/// Fixed coping-strategy list per pattern
const fn coping_strategies(pattern: MoodPattern) -> &'static [&'static str] {
    match pattern {
        MoodPattern::PossibleHypomania => &[
            "Practice slow, deep breathing",
            "Write in a journal to process thoughts",
            "Limit caffeine and stimulants",
            "Create a calming environment",
        ],
        MoodPattern::PossibleDepression => &[
            "Take small, manageable steps",
            "Connect with one supportive person",
            "Try gentle movement or stretching",
            "Focus on basic needs (food, water, rest)",
        ],
        MoodPattern::MoodFluctuation => &[
            "Use mood tracking apps",
            "Practice mindfulness meditation",
            "Maintain consistent daily routines",
            "Identify your mood triggers",
        ],
        MoodPattern::StableMood => &[
            "Continue what's working well",
            "Plan enjoyable activities",
            "Maintain social connections",
            "Practice gratitude exercises",
        ],
    }
}

/// Handle a `/mood` request body
pub fn handle(body: &Value) -> MoodReport {
    let mood = body.get("mood_score").and_then(Value::as_i64).unwrap_or(5);
    let energy = body
        .get("energy_level")
        .and_then(Value::as_i64)
        .unwrap_or(5);

    let pattern = detect_pattern(mood, energy);

    MoodReport {
        current_mood: mood,
        energy_level: energy,
        pattern_detected: pattern,
        luna_insight: insight(pattern),
        coping_strategies: coping_strategies(pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_possible_hypomania() {
        assert_eq!(detect_pattern(8, 8), MoodPattern::PossibleHypomania);
        assert_eq!(detect_pattern(7, 7), MoodPattern::PossibleHypomania);
    }

    #[test]
    fn test_possible_depression() {
        assert_eq!(detect_pattern(2, 2), MoodPattern::PossibleDepression);
        assert_eq!(detect_pattern(3, 3), MoodPattern::PossibleDepression);
    }

    #[test]
    fn test_mood_fluctuation() {
        // High mood without the energy to match
        assert_eq!(detect_pattern(7, 3), MoodPattern::MoodFluctuation);
        // Low mood with normal energy
        assert_eq!(detect_pattern(3, 6), MoodPattern::MoodFluctuation);
    }

    #[test]
    fn test_stable_mood() {
        assert_eq!(detect_pattern(5, 5), MoodPattern::StableMood);
        assert_eq!(detect_pattern(6, 4), MoodPattern::StableMood);
        assert_eq!(detect_pattern(4, 8), MoodPattern::StableMood);
    }

    #[test]
    fn test_handle_reads_mood_score_field() {
        let report = handle(&json!({"mood_score": 8, "energy_level": 8}));
        assert_eq!(report.current_mood, 8);
        assert_eq!(report.pattern_detected, MoodPattern::PossibleHypomania);
        assert!(report.luna_insight.contains("hypomanic"));
    }

    #[test]
    fn test_handle_defaults() {
        let report = handle(&json!({}));
        assert_eq!(report.current_mood, 5);
        assert_eq!(report.energy_level, 5);
        assert_eq!(report.pattern_detected, MoodPattern::StableMood);
        assert_eq!(report.coping_strategies.len(), 4);
    }
}
