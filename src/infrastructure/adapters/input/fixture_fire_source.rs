use chrono::{Days, NaiveDate};

use crate::application::ports::output::fire_event_port::FireEventSource;
use crate::domain::entities::fire_event::{FireEvent, FireSample};
use crate::domain::services::aqi_synthesis_service::AQI_EPOCH;
use crate::error::FireSourceError;

// (days after AQI_EPOCH, latitude, longitude, acres)
type FixtureRow = (u64, f64, f64, u32);

const PALISADES: [FixtureRow; 6] = [
    (0, 34.0522, -118.5536, 1200),
    (1, 34.0530, -118.5540, 3500),
    (2, 34.0535, -118.5545, 5000),
    (3, 34.0540, -118.5550, 6800),
    (4, 34.0545, -118.5555, 7500),
    (5, 34.0550, -118.5560, 8200),
];

const EATON: [FixtureRow; 6] = [
    (2, 34.2468, -118.3029, 800),
    (3, 34.2472, -118.3035, 2500),
    (4, 34.2480, -118.3040, 4200),
    (5, 34.2485, -118.3045, 5800),
    (6, 34.2490, -118.3050, 6500),
    (7, 34.2495, -118.3055, 7200),
];

const HUGHES: [FixtureRow; 6] = [
    (3, 34.4897, -118.5259, 1500),
    (4, 34.4900, -118.5265, 3000),
    (5, 34.4905, -118.5270, 4500),
    (6, 34.4910, -118.5275, 5800),
    (7, 34.4915, -118.5280, 6500),
    (8, 34.4920, -118.5285, 7500),
];

/// The January 2025 Los Angeles fires, built once and served read-only.
#[derive(Debug, Clone)]
pub struct FixtureFireEventSource {
    events: Vec<FireEvent>,
}

impl FixtureFireEventSource {
    pub fn new() -> Self {
        let events = [
            ("Palisades Fire", &PALISADES),
            ("Eaton Fire", &EATON),
            ("Hughes Fire", &HUGHES),
        ]
        .into_iter()
        .map(|(name, rows)| FireEvent::new(name, rows.iter().filter_map(sample).collect()))
        .collect();

        Self { events }
    }

    pub fn events(&self) -> &[FireEvent] {
        &self.events
    }
}

impl Default for FixtureFireEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FireEventSource for FixtureFireEventSource {
    fn fire_events(&self) -> Result<Vec<FireEvent>, FireSourceError> {
        Ok(self.events.clone())
    }
}

fn sample(&(offset, latitude, longitude, acres): &FixtureRow) -> Option<FireSample> {
    let date: NaiveDate = AQI_EPOCH.checked_add_days(Days::new(offset))?;
    Some(FireSample::new(date, latitude, longitude, acres))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_has_three_fires_of_six_samples() {
        let source = FixtureFireEventSource::new();
        let events = source.fire_events().unwrap();

        let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Palisades Fire", "Eaton Fire", "Hughes Fire"]);
        assert!(events.iter().all(|e| e.samples.len() == 6));
    }

    #[test]
    fn test_fixture_dates_and_sizes() {
        let source = FixtureFireEventSource::new();
        let events = source.events();

        let date = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
        assert_eq!(events[0].samples[0].date, date(7));
        assert_eq!(events[1].samples[0].date, date(9));
        assert_eq!(events[2].samples[0].date, date(10));
        assert_eq!(events[2].samples[5].date, date(15));
        assert_eq!(events[0].samples[5].burned_area_acres, 8200);
        assert_eq!(events[1].samples[0].burned_area_acres, 800);
    }

    #[test]
    fn test_fixture_samples_are_chronological_and_growing() {
        for event in FixtureFireEventSource::new().events() {
            for pair in event.samples.windows(2) {
                assert!(pair[0].date < pair[1].date, "{} out of order", event.name);
                assert!(pair[0].burned_area_acres <= pair[1].burned_area_acres);
            }
        }
    }
}
