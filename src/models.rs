// src/models.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::charset::CharClass;

/// Options controlling password generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: false,
        }
    }
}

impl PasswordOptions {
    /// The character classes enabled by these options, in registry order.
    pub fn enabled(&self) -> Vec<CharClass> {
        let mut classes = Vec::with_capacity(4);
        if self.include_uppercase {
            classes.push(CharClass::Uppercase);
        }
        if self.include_lowercase {
            classes.push(CharClass::Lowercase);
        }
        if self.include_numbers {
            classes.push(CharClass::Digit);
        }
        if self.include_special {
            classes.push(CharClass::Special);
        }
        classes
    }
}

/// Qualitative strength level derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLevel::VeryWeak => write!(f, "Very Weak"),
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Moderate => write!(f, "Moderate"),
            StrengthLevel::Strong => write!(f, "Strong"),
            StrengthLevel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Display color tag associated with a strength level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StrengthColor {
    Danger,
    Warning,
    Success,
}

/// Result of scoring a password against the strength rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Strength score (0-100)
    pub score: u8,
    /// Qualitative strength level
    pub level: StrengthLevel,
    /// Color tag for display
    pub color: StrengthColor,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
}
