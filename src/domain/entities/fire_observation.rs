use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::fire_event::{FireEvent, FireSample};

/// A single fire sample paired with the name of its fire, as sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatFireObservation {
    pub name: String,
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "size")]
    pub size_acres: u32,
}

impl FlatFireObservation {
    pub fn new(event: &FireEvent, sample: &FireSample) -> Self {
        FlatFireObservation {
            name: event.name.clone(),
            date: sample.date,
            latitude: sample.latitude,
            longitude: sample.longitude,
            size_acres: sample.burned_area_acres,
        }
    }
}
