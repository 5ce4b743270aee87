use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest value on the AQI scale.
pub const AQI_MAX: u16 = 500;

/// One synthetic air-quality reading for a day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AqiSample {
    pub date: NaiveDate,
    /// Always within `0..=AQI_MAX`.
    pub value: u16,
    pub latitude: f64,
    pub longitude: f64,
}
