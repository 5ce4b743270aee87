use log::debug;

use crate::application::ports::output::fire_event_port::FireEventSource;
use crate::domain::entities::aqi_sample::AqiSample;
use crate::domain::entities::fire_observation::FlatFireObservation;
use crate::domain::services::aqi_synthesis_service::{AqiSynthesisService, WindowedAqiSynthesizer};
use crate::domain::services::fire_aggregation_service::flatten_fire_events;
use crate::error::ComputationFailure;

#[derive(Debug, Clone, PartialEq)]
pub struct FireAqiReport {
    pub fire_data: Vec<FlatFireObservation>,
    pub aqi_data: Vec<AqiSample>,
}

/// Builds a fresh report from the fire source on every call.
pub struct AssembleFireAqiUseCase<S: FireEventSource, A: AqiSynthesisService = WindowedAqiSynthesizer> {
    source: S,
    synthesizer: A,
}

impl<S: FireEventSource> AssembleFireAqiUseCase<S> {
    pub fn new(source: S) -> Self {
        Self::with_synthesizer(source, WindowedAqiSynthesizer::default())
    }
}

impl<S: FireEventSource, A: AqiSynthesisService> AssembleFireAqiUseCase<S, A> {
    pub fn with_synthesizer(source: S, synthesizer: A) -> Self {
        Self { source, synthesizer }
    }

    pub fn execute(&self) -> Result<FireAqiReport, ComputationFailure> {
        let events = self.source.fire_events()?;
        let fire_data = flatten_fire_events(&events);
        let aqi_data = self.synthesizer.synthesize(&events);
        debug!(
            "Assembled {} fire observations and {} AQI samples",
            fire_data.len(),
            aqi_data.len()
        );

        Ok(FireAqiReport { fire_data, aqi_data })
    }
}
