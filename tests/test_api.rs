use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use passmint::api::routes::configure_routes;
use passmint::core::config::Config;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_generate_with_defaults() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let password = body["password"].as_str().unwrap();
    assert_eq!(password.chars().count(), 12);
    assert!(body["strength"]["score"].is_u64());
    assert!(body["strength"]["feedback"].is_array());
}

#[actix_web::test]
async fn test_generate_rejects_out_of_range_length() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "length": 129 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Password length must be between 1 and 128 characters"
    );
}

#[actix_web::test]
async fn test_generate_rejects_empty_class_selection() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({
            "uppercase": false,
            "lowercase": false,
            "numbers": false,
            "special": false,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "At least one character type must be selected");
}

#[actix_web::test]
async fn test_check_strength_requires_password() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/check-strength")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Password is required");
}

#[actix_web::test]
async fn test_check_strength_reports_level_and_color() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/check-strength")
        .set_json(json!({ "password": "Tr0ub4dor&3xyz" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["strength"]["score"], 80);
    assert_eq!(body["strength"]["level"], "Strong");
    assert_eq!(body["strength"]["color"], "success");
    assert_eq!(
        body["strength"]["feedback"],
        json!(["Excellent password strength!"])
    );
}
