use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named fire and its day-by-day progression.
///
/// Samples are expected in chronological order with a non-decreasing burned
/// area. Neither is checked; sources are trusted to build them that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireEvent {
    pub name: String,
    pub samples: Vec<FireSample>,
}

/// The extent of a fire on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireSample {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    /// Cumulative burned area in acres.
    #[serde(rename = "size")]
    pub burned_area_acres: u32,
}

impl FireEvent {
    pub fn new(name: impl Into<String>, samples: Vec<FireSample>) -> Self {
        FireEvent {
            name: name.into(),
            samples,
        }
    }

    /// Number of samples recorded on `date`.
    pub fn samples_on(&self, date: NaiveDate) -> usize {
        self.samples.iter().filter(|s| s.date == date).count()
    }
}

impl FireSample {
    pub fn new(date: NaiveDate, latitude: f64, longitude: f64, burned_area_acres: u32) -> Self {
        FireSample {
            date,
            latitude,
            longitude,
            burned_area_acres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_samples_on_counts_every_match() {
        let event = FireEvent::new(
            "Test Fire",
            vec![
                FireSample::new(day(7), 34.0, -118.0, 10),
                FireSample::new(day(7), 34.0, -118.0, 20),
                FireSample::new(day(8), 34.0, -118.0, 30),
            ],
        );

        assert_eq!(event.samples_on(day(7)), 2);
        assert_eq!(event.samples_on(day(8)), 1);
        assert_eq!(event.samples_on(day(9)), 0);
    }

    #[test]
    fn test_sample_deserializes_from_yaml() {
        let yaml = "{ date: 2025-01-07, latitude: 34.0522, longitude: -118.5536, size: 1200 }";
        let sample: FireSample = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(sample.date, day(7));
        assert_eq!(sample.burned_area_acres, 1200);
    }
}
