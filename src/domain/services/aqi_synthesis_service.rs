// src/domain/services/aqi_synthesis_service.rs
use chrono::{Days, NaiveDate};

use crate::domain::entities::aqi_sample::{AqiSample, AQI_MAX};
use crate::domain::entities::fire_event::FireEvent;

/// First day of the default AQI window.
pub const AQI_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 7) {
    Some(date) => date,
    None => panic!("invalid AQI epoch"),
};

/// Length of the default AQI window in days.
pub const AQI_WINDOW_DAYS: u32 = 24;

/// Los Angeles centre, where every synthetic reading is placed.
pub const LA_CENTROID: (f64, f64) = (34.0522, -118.2437);

const BASE_AQI: f64 = 50.0;
const CYCLE_STEP: f64 = 25.0;
const CYCLE_LENGTH: u32 = 5;
const PER_FIRE_IMPACT: f64 = 75.0;
const OVERLAP_BOOST: f64 = 0.5;

pub trait AqiSynthesisService {
    fn synthesize(&self, events: &[FireEvent]) -> Vec<AqiSample>;
}

/// The run of consecutive days to generate readings for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiWindow {
    pub start: NaiveDate,
    pub days: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for AqiWindow {
    fn default() -> Self {
        AqiWindow {
            start: AQI_EPOCH,
            days: AQI_WINDOW_DAYS,
            latitude: LA_CENTROID.0,
            longitude: LA_CENTROID.1,
        }
    }
}

impl AqiWindow {
    /// Iterates `(day index, date)` over the window in order.
    pub fn dates(&self) -> impl Iterator<Item = (u32, NaiveDate)> + '_ {
        (0..self.days).filter_map(move |i| {
            self.start
                .checked_add_days(Days::new(u64::from(i)))
                .map(|date| (i, date))
        })
    }
}

/// Synthesizes one AQI reading per day of its window from fire activity.
#[derive(Debug, Clone, Default)]
pub struct WindowedAqiSynthesizer {
    window: AqiWindow,
}

impl WindowedAqiSynthesizer {
    pub fn new(window: AqiWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &AqiWindow {
        &self.window
    }
}

impl AqiSynthesisService for WindowedAqiSynthesizer {
    fn synthesize(&self, events: &[FireEvent]) -> Vec<AqiSample> {
        self.window
            .dates()
            .map(|(index, date)| AqiSample {
                date,
                value: aqi_value(index, active_fires_on(events, date)),
                latitude: self.window.latitude,
                longitude: self.window.longitude,
            })
            .collect()
    }
}

/// Counts (event, sample) pairs dated `date` across all events.
pub fn active_fires_on(events: &[FireEvent], date: NaiveDate) -> usize {
    events.iter().map(|event| event.samples_on(date)).sum()
}

/// AQI for day `index` of a window with `active_fires` samples on that day.
///
/// A cyclic base of 50..=150 gets a flat +75 per active fire; two or more
/// fires then scale the total by `1 + (n - 1) * 0.5`. The result is
/// truncated and capped at `AQI_MAX`.
pub fn aqi_value(index: u32, active_fires: usize) -> u16 {
    let fires = active_fires as f64;
    let mut aqi = BASE_AQI + f64::from(index % CYCLE_LENGTH) * CYCLE_STEP;
    aqi += PER_FIRE_IMPACT * fires;

    if active_fires > 1 {
        aqi *= 1.0 + (fires - 1.0) * OVERLAP_BOOST;
    }

    aqi.floor().clamp(0.0, f64::from(AQI_MAX)) as u16
}
