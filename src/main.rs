// src/main.rs
use env_logger::Env;
use log::info;
use structopt::StructOpt;
use wildfire_aqi::cli::Cli;
use wildfire_aqi::config::Settings;
use wildfire_aqi::setup::setup_and_run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = Cli::from_args();
    let config = match Settings::load(&opt.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {:?}", e);
            std::process::exit(1);
        }
    };

    info!("Loaded configuration: {:?}", config);

    setup_and_run(config).await
}
