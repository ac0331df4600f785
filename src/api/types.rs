// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::StrengthReport;

// Password generation requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Password length (default: 12)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub numbers: Option<bool>,
    /// Include special characters (default: false)
    pub special: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength report for the generated password
    pub strength: Option<StrengthReport>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Strength analysis requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckStrengthRequest {
    /// Password to analyze
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckStrengthResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength report
    pub strength: Option<StrengthReport>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}
