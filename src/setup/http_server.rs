use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::config::Settings;
use crate::infrastructure::web::fire_aqi_controller;
use crate::setup::use_case_initializer::UseCases;

#[derive(Clone)]
pub struct AppState {
    pub use_cases: UseCases,
}

/// Registers the API ahead of the static catch-all at `/`.
pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: &str) {
    cfg.configure(fire_aqi_controller::configure)
        .service(Files::new("/", static_dir).index_file("index.html"));
}

pub async fn run_http_server(config: Settings, use_cases: UseCases) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState { use_cases });
    let static_dir = config.static_dir.clone();
    let address = config.bind_address();

    info!("Listening on http://{}", address);

    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(move |cfg| configure_routes(cfg, &static_dir))
    })
    .bind(address)?
    .run()
    .await
}
