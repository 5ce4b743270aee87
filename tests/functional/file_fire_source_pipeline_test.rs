use std::io::Write;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use tempfile::NamedTempFile;
use wildfire_aqi::config::Settings;
use wildfire_aqi::infrastructure::web::fire_aqi_controller;
use wildfire_aqi::infrastructure::adapters::input::file_fire_source::FileFireEventSource;
use wildfire_aqi::setup::http_server::AppState;
use wildfire_aqi::setup::use_case_initializer::{initialize_use_cases, UseCases};

const TWO_FIRES: &str = r#"
- name: Palisades Fire
  samples:
    - { date: 2025-01-10, latitude: 34.0540, longitude: -118.5550, size: 6800 }
- name: Eaton Fire
  samples:
    - { date: 2025-01-10, latitude: 34.2472, longitude: -118.3035, size: 2500 }
"#;

fn fires_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[actix_web::test]
async fn test_two_overlapping_fires_from_file() {
    let file = fires_file(TWO_FIRES);
    let config = Settings {
        fire_data_path: Some(file.path().to_string_lossy().into_owned()),
        ..Settings::default()
    };
    let data = web::Data::new(AppState {
        use_cases: initialize_use_cases(&config),
    });

    let mut app = test::init_service(
        App::new()
            .app_data(data.clone())
            .configure(fire_aqi_controller::configure),
    )
    .await;
    let req = test::TestRequest::with_uri("/api/fire_aqi_data").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&mut app, req).await;

    assert_eq!(body["status"], "success");
    assert_eq!(body["fire_data"].as_array().unwrap().len(), 2);
    // 2025-01-10 is day 3: (125 + 2 * 75) * 1.5
    assert_eq!(body["aqi_data"][3]["date"], "2025-01-10");
    assert_eq!(body["aqi_data"][3]["value"], 412);
    assert_eq!(body["aqi_data"][2]["value"], 100);
}

#[actix_web::test]
async fn test_file_removed_between_requests() {
    let file = fires_file(TWO_FIRES);
    let path = file.path().to_path_buf();
    let data = web::Data::new(AppState {
        use_cases: UseCases::new(Arc::new(FileFireEventSource::new(&path))),
    });

    let mut app = test::init_service(
        App::new()
            .app_data(data.clone())
            .configure(fire_aqi_controller::configure),
    )
    .await;

    let resp = test::call_service(
        &mut app,
        test::TestRequest::with_uri("/api/fire_aqi_data").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    drop(file);

    let resp = test::call_service(
        &mut app,
        test::TestRequest::with_uri("/api/fire_aqi_data").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().starts_with("Fire data unavailable"));
}
