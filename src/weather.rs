// ⛅ Weather Forecast - Goblinocus city forecasts
//
// The most recent location/condition live on a caller-owned `Forecaster`
// instead of process-wide state.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Remembers the most recently forecasted location and condition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecaster {
    current_location: Option<String>,
    current_condition: Option<String>,
}

impl Forecaster {
    pub fn new() -> Self {
        Forecaster::default()
    }

    /// Record `city`/`condition` as current and return the forecast line
    pub fn forecast(&mut self, city: &str, condition: &str) -> String {
        debug!(city, condition, "updating current forecast");
        self.current_location = Some(city.to_string());
        self.current_condition = Some(condition.to_string());
        forecast(city, condition)
    }

    pub fn current_location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }

    pub fn current_condition(&self) -> Option<&str> {
        self.current_condition.as_deref()
    }
}

/// Forecast line without recording anything
pub fn forecast(city: &str, condition: &str) -> String {
    format!("{} - current weather condition: {}", city, condition)
}
