pub mod aqi_sample;
pub mod fire_event;
pub mod fire_observation;
