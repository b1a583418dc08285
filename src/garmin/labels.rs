// ABOUTME: Display helpers for Garmin activity types and training effect messages
// ABOUTME: Title-cases Garmin keys, maps metabolism effect tokens and activity icons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};

/// Icon shown on the Notion page for each activity type
const ACTIVITY_ICONS: &[(&str, &str)] = &[
    ("Running", "https://img.icons8.com/?size=100&id=k1l1XFkME39t&format=png&color=000000"),
    ("Treadmill Running", "https://img.icons8.com/?size=100&id=9794&format=png&color=000000"),
    ("Cycling", "https://img.icons8.com/?size=100&id=47443&format=png&color=000000"),
    ("Indoor Cycling", "https://img.icons8.com/?size=100&id=47443&format=png&color=000000"),
    ("Swimming", "https://img.icons8.com/?size=100&id=9777&format=png&color=000000"),
    ("Indoor Cardio", "https://img.icons8.com/?size=100&id=62779&format=png&color=000000"),
    ("Walking", "https://img.icons8.com/?size=100&id=9807&format=png&color=000000"),
    ("Pilates", "https://img.icons8.com/?size=100&id=9774&format=png&color=000000"),
    ("Yoga", "https://img.icons8.com/?size=100&id=9783&format=png&color=000000"),
    ("Hiking", "https://img.icons8.com/?size=100&id=9844&format=png&color=000000"),
    ("Rowing", "https://img.icons8.com/?size=100&id=24889&format=png&color=000000"),
    ("Breathwork", "https://img.icons8.com/?size=100&id=9798&format=png&color=000000"),
    ("Strength Training", "https://img.icons8.com/?size=100&id=107640&format=png&color=000000"),
    ("Stretching", "https://img.icons8.com/?size=100&id=djfOcRn1m_kh&format=png&color=000000"),
];

/// Closed vocabulary of metabolism effect tokens
const TRAINING_EFFECT_LABELS: &[(&str, &str)] = &[
    ("NO", "No Benefit"),
    ("MINOR", "Some Benefit"),
    ("RECOVERY", "Recovery"),
    ("MAINTAINING", "Maintaining"),
    ("IMPROVING", "Impacting"),
    ("IMPACTING", "Impacting"),
    ("HIGHLY", "Highly Impacting"),
    ("OVERREACHING", "Overreaching"),
];

/// Turn a Garmin key into display text: `AEROBIC_BASE` → `Aerobic Base`.
///
/// Underscores become spaces; a letter is upper-cased when it follows a
/// non-letter and lower-cased otherwise, so `VO2MAX` reads `Vo2Max`.
#[must_use]
pub fn title_case_key(key: &str) -> String {
    let mut title = String::with_capacity(key.len());
    let mut previous_is_letter = false;

    for c in key.chars() {
        if c == '_' {
            title.push(' ');
        } else if !c.is_alphabetic() {
            title.push(c);
        } else if previous_is_letter {
            title.extend(c.to_lowercase());
        } else {
            title.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    title
}

/// Parse an aerobic/anaerobic effect message such as `IMPROVING_AEROBIC_BASE_8`.
///
/// Only the leading token is meaningful.
///
/// # Errors
///
/// Returns an error for tokens outside the known vocabulary; an unknown token
/// means Garmin changed its contract and must not be silently defaulted.
pub fn parse_metabolism_effect(message: &str) -> AppResult<String> {
    let token = message.split('_').next().unwrap_or_default();

    TRAINING_EFFECT_LABELS
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, label)| (*label).to_owned())
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "Training effect '{message}' is not a valid option"
            ))
        })
}

/// Icon URL for an activity type display name
#[must_use]
pub fn activity_icon_url(activity_type: &str) -> Option<&'static str> {
    ACTIVITY_ICONS
        .iter()
        .find(|(name, _)| *name == activity_type)
        .map(|(_, url)| *url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_key() {
        assert_eq!(title_case_key("AEROBIC_BASE"), "Aerobic Base");
        assert_eq!(title_case_key("treadmill_running"), "Treadmill Running");
        assert_eq!(title_case_key("VO2MAX"), "Vo2Max");
        assert_eq!(title_case_key(""), "");
    }

    #[test]
    fn test_metabolism_effect_tokens() {
        assert_eq!(parse_metabolism_effect("IMPROVING_AEROBIC_BASE_8").unwrap(), "Impacting");
        assert_eq!(parse_metabolism_effect("NO_ANAEROBIC_BENEFIT_1").unwrap(), "No Benefit");
        assert_eq!(parse_metabolism_effect("HIGHLY_IMPACTING_TEMPO_23").unwrap(), "Highly Impacting");
        assert_eq!(parse_metabolism_effect("RECOVERY").unwrap(), "Recovery");
    }

    #[test]
    fn test_unknown_metabolism_token_is_rejected() {
        let err = parse_metabolism_effect("EXTREME_SPRINT_9").unwrap_err();
        assert!(err.message.contains("EXTREME_SPRINT_9"));
    }

    #[test]
    fn test_activity_icon_lookup() {
        assert!(activity_icon_url("Running").is_some());
        assert!(activity_icon_url("Treadmill Running").is_some());
        assert_eq!(activity_icon_url("Paragliding"), None);
    }
}
