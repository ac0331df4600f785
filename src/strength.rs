// src/strength.rs
use crate::charset::CharClass;
use crate::models::{StrengthColor, StrengthLevel, StrengthReport};

const COMMON_PATTERNS: [&str; 5] = ["abc", "123", "qwe", "asd", "zxc"];

/// Score a password against the heuristic strength rubric.
///
/// Pure and deterministic. The empty string yields the minimum report; every
/// other input is scored by additive, independent components and the total is
/// capped at 100.
pub fn score_password(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            score: 0,
            level: StrengthLevel::VeryWeak,
            color: StrengthColor::Danger,
            feedback: vec!["Password cannot be empty".to_string()],
        };
    }

    let mut score: u32 = 0;
    let mut feedback = Vec::new();

    // Length scoring
    let length = password.chars().count();
    if length >= 12 {
        score += 25;
    } else if length >= 8 {
        score += 15;
        feedback.push("Consider using at least 12 characters for better security".to_string());
    } else {
        score += 5;
        feedback.push("Password is too short - use at least 8 characters".to_string());
    }

    // Character variety scoring
    let variety = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Special,
    ]
    .iter()
    .filter(|class| password.chars().any(|c| class.contains(c)))
    .count();

    match variety {
        4 => score += 25,
        3 => {
            score += 20;
            feedback.push("Consider adding special characters for stronger security".to_string());
        }
        2 => {
            score += 10;
            feedback
                .push("Use a mix of uppercase, lowercase, numbers, and special characters".to_string());
        }
        _ => {
            score += 5;
            feedback.push("Password should contain different types of characters".to_string());
        }
    }

    // Repeated characters (same character three or more times in a row)
    if has_triple_repeat(password) {
        feedback.push("Avoid repeating the same character multiple times".to_string());
    } else {
        score += 15;
    }

    // Common keyboard patterns, matched case-insensitively
    let lowered = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        feedback.push("Avoid common keyboard patterns or sequences".to_string());
    } else {
        score += 15;
    }

    // Entropy bonus for longer passwords with variety
    if length > 16 && variety >= 3 {
        score += 20;
    }

    let score = score.min(100) as u8;

    let (level, color) = match score {
        90..=100 => (StrengthLevel::VeryStrong, StrengthColor::Success),
        70..=89 => (StrengthLevel::Strong, StrengthColor::Success),
        50..=69 => (StrengthLevel::Moderate, StrengthColor::Warning),
        30..=49 => (StrengthLevel::Weak, StrengthColor::Warning),
        _ => (StrengthLevel::VeryWeak, StrengthColor::Danger),
    };

    if score >= 70 && feedback.is_empty() {
        feedback.push("Excellent password strength!".to_string());
    }

    StrengthReport {
        score,
        level,
        color,
        feedback,
    }
}

fn has_triple_repeat(password: &str) -> bool {
    let mut run = 0;
    let mut prev = None;
    for c in password.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}
