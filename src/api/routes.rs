// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generation
    cfg.route(
        "/generate",
        web::post().to(handlers::generator::generate_password),
    );

    // Strength analysis
    cfg.route(
        "/check-strength",
        web::post().to(handlers::generator::check_strength),
    );
}
