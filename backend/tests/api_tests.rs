//! HTTP-level tests for the template endpoints.

use actix_web::{test, web, App};

use backend::services;
use backend::store::TemplateStore;
use common::model::block::{Block, BlockBody, ButtonProps};
use common::requests::{LoadTemplateResponse, SaveTemplateRequest, SaveTemplateResponse};

fn sample_json() -> String {
    let blocks = vec![Block {
        id: "button-1".to_string(),
        body: BlockBody::Button(ButtonProps::default()),
        rich_text: None,
    }];
    serde_json::to_string(&blocks).unwrap()
}

macro_rules! test_app {
    ($dir:expr) => {{
        let store = TemplateStore::open($dir.path().join("api.sqlite")).unwrap();
        test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(services::templates::configure_routes()),
        )
        .await
    }};
}

#[actix_web::test]
async fn save_then_load_round_trips_through_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir);

    let request = SaveTemplateRequest {
        name: "launch".to_string(),
        html: "<html>launch</html>".to_string(),
        json: sample_json(),
        overwrite: false,
    };
    let response: SaveTemplateResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(&request)
            .to_request(),
    )
    .await;
    assert_eq!(response.json_url, "/api/templates/launch");
    assert_eq!(response.html_url, "/api/templates/launch/html");

    let loaded: LoadTemplateResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/templates/launch")
            .to_request(),
    )
    .await;
    assert_eq!(loaded.json_data, request.json);

    let html = test::call_and_read_body(
        &app,
        test::TestRequest::get()
            .uri("/api/templates/launch/html")
            .to_request(),
    )
    .await;
    assert_eq!(html, "<html>launch</html>".as_bytes());
}

#[actix_web::test]
async fn duplicate_save_returns_409() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir);

    let request = SaveTemplateRequest {
        name: "promo".to_string(),
        html: "<html></html>".to_string(),
        json: sample_json(),
        overwrite: false,
    };
    let first = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(&request)
            .to_request(),
    )
    .await;
    assert!(first.status().is_success());

    let second = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(&request)
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), 409);

    // With the overwrite flag the same name succeeds.
    let overwrite = SaveTemplateRequest {
        overwrite: true,
        ..request
    };
    let third = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(&overwrite)
            .to_request(),
    )
    .await;
    assert!(third.status().is_success());
}

#[actix_web::test]
async fn missing_template_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir);

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/templates/missing")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), 404);
}
