use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;

use crate::config::Settings;
use crate::infrastructure::adapters::input::fixture_fire_source::FixtureFireEventSource;
use crate::setup::http_server::AppState;
use crate::setup::use_case_initializer::UseCases;

pub fn load_test_config() -> Settings {
    Settings {
        static_dir: frontend_dir().to_string_lossy().into_owned(),
        ..Settings::default()
    }
}

/// The `frontend/` directory shipped with the crate.
pub fn frontend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("frontend")
}

pub fn fixture_state() -> web::Data<AppState> {
    web::Data::new(AppState {
        use_cases: UseCases::new(Arc::new(FixtureFireEventSource::new())),
    })
}
