use std::sync::Arc;

use log::info;

use crate::application::ports::output::fire_event_port::FireEventSource;
use crate::application::use_cases::assemble_fire_aqi::AssembleFireAqiUseCase;
use crate::config::Settings;
use crate::infrastructure::adapters::input::file_fire_source::FileFireEventSource;
use crate::infrastructure::adapters::input::fixture_fire_source::FixtureFireEventSource;

pub type SharedFireEventSource = Arc<dyn FireEventSource>;

#[derive(Clone)]
pub struct UseCases {
    pub assemble_fire_aqi: Arc<AssembleFireAqiUseCase<SharedFireEventSource>>,
}

impl UseCases {
    pub fn new(source: SharedFireEventSource) -> Self {
        Self {
            assemble_fire_aqi: Arc::new(AssembleFireAqiUseCase::new(source)),
        }
    }
}

pub fn fire_event_source(config: &Settings) -> SharedFireEventSource {
    match &config.fire_data_path {
        Some(path) => {
            info!("Reading fire events from {}", path);
            Arc::new(FileFireEventSource::new(path))
        }
        None => {
            info!("Using built-in fire fixture");
            Arc::new(FixtureFireEventSource::new())
        }
    }
}

pub fn initialize_use_cases(config: &Settings) -> UseCases {
    UseCases::new(fire_event_source(config))
}
