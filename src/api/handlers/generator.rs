// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};

use crate::api::types::{
    CheckStrengthRequest, CheckStrengthResponse, GenerateRequest, GenerateResponse,
};
use crate::core::config::Config;
use crate::generator;
use crate::models::PasswordOptions;
use crate::strength;

/// Generate a password
///
/// Generates a random password from the requested character classes and
/// reports its strength.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Invalid request", body = GenerateResponse),
        (status = 500, description = "Server error", body = GenerateResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<GenerateRequest>,
) -> HttpResponse {
    // Apply defaults for any fields the caller omitted
    let options = PasswordOptions {
        length: generation_req.length.unwrap_or(config.default_password_length),
        include_uppercase: generation_req.uppercase.unwrap_or(true),
        include_lowercase: generation_req.lowercase.unwrap_or(true),
        include_numbers: generation_req.numbers.unwrap_or(true),
        include_special: generation_req.special.unwrap_or(false),
    };

    // Validate options
    if options.length < 1 || options.length > 128 {
        return HttpResponse::BadRequest().json(GenerateResponse {
            success: false,
            password: None,
            strength: None,
            error: Some("Password length must be between 1 and 128 characters".to_string()),
        });
    }

    if options.enabled().is_empty() {
        return HttpResponse::BadRequest().json(GenerateResponse {
            success: false,
            password: None,
            strength: None,
            error: Some("At least one character type must be selected".to_string()),
        });
    }

    // Generate password
    let password = match generator::generate(&options) {
        Ok(pwd) => pwd,
        Err(e) => {
            log::error!("Error generating password: {}", e);
            return HttpResponse::InternalServerError().json(GenerateResponse {
                success: false,
                password: None,
                strength: None,
                error: Some("An error occurred while generating the password".to_string()),
            });
        }
    };

    // Score the generated password
    let report = strength::score_password(&password);

    HttpResponse::Ok().json(GenerateResponse {
        success: true,
        password: Some(password),
        strength: Some(report),
        error: None,
    })
}

/// Check password strength
///
/// Scores a password against the strength rubric and returns feedback.
#[utoipa::path(
    post,
    path = "/check-strength",
    tag = "Generator",
    request_body = CheckStrengthRequest,
    responses(
        (status = 200, description = "Strength report", body = CheckStrengthResponse),
        (status = 400, description = "Invalid request", body = CheckStrengthResponse),
        (status = 500, description = "Server error", body = CheckStrengthResponse)
    )
)]
pub async fn check_strength(check_req: web::Json<CheckStrengthRequest>) -> HttpResponse {
    let password = match check_req.password.as_deref() {
        Some(pwd) if !pwd.is_empty() => pwd,
        _ => {
            return HttpResponse::BadRequest().json(CheckStrengthResponse {
                success: false,
                strength: None,
                error: Some("Password is required".to_string()),
            });
        }
    };

    let report = strength::score_password(password);

    HttpResponse::Ok().json(CheckStrengthResponse {
        success: true,
        strength: Some(report),
        error: None,
    })
}
