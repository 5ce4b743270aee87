pub mod http_server;
pub mod use_case_initializer;

use crate::config::Settings;

pub async fn setup_and_run(config: Settings) -> std::io::Result<()> {
    let use_cases = use_case_initializer::initialize_use_cases(&config);
    http_server::run_http_server(config, use_cases).await
}
