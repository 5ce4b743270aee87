// src/domain/services/fire_aggregation_service.rs
use crate::domain::entities::fire_event::FireEvent;
use crate::domain::entities::fire_observation::FlatFireObservation;

/// Flattens events into one observation per sample, keeping event order and
/// then sample order. Nothing is merged or dropped.
pub fn flatten_fire_events(events: &[FireEvent]) -> Vec<FlatFireObservation> {
    events
        .iter()
        .flat_map(|event| {
            event
                .samples
                .iter()
                .map(move |sample| FlatFireObservation::new(event, sample))
        })
        .collect()
}
