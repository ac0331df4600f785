// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{Config, DEV_SESSION_SECRET};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::check_strength,
    ),
    components(
        schemas(
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::CheckStrengthRequest,
            crate::api::types::CheckStrengthResponse,
            crate::models::StrengthReport,
            crate::models::StrengthLevel,
            crate::models::StrengthColor,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength analysis endpoints")
    ),
    info(
        title = "Passmint API",
        version = "0.1.0",
        description = "Random password generation and strength scoring service"
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting passmint API server on {}:{}",
        config.web_address,
        config.web_port
    );

    if config.session_secret == DEV_SESSION_SECRET {
        log::warn!("SESSION_SECRET not set, using development secret");
    }

    let bind_address = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the API routes
            .configure(routes::configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
