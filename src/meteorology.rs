// 🌡️ Meteorology - Unit-tagged measurements and report formatting

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TEMPERATURE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub degree: i32,
    pub unit: TemperatureUnit,
}

impl Temperature {
    pub fn new(degree: i32, unit: TemperatureUnit) -> Self {
        Temperature { degree, unit }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.degree, self.unit)
    }
}

// ============================================================================
// SPEED
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    KmPerHour,
    MilesPerHour,
}

impl SpeedUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            SpeedUnit::KmPerHour => "km/h",
            SpeedUnit::MilesPerHour => "mph",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speed {
    pub magnitude: i32,
    pub unit: SpeedUnit,
}

impl Speed {
    pub fn new(magnitude: i32, unit: SpeedUnit) -> Self {
        Speed { magnitude, unit }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// One station reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteorologyData {
    pub location: String,
    pub temperature: Temperature,
    pub wind_direction: String,
    pub wind_speed: Speed,
    /// Relative humidity, percent
    pub humidity: u8,
}

impl fmt::Display for MeteorologyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Wind {} at {}, {}% Humidity",
            self.location, self.temperature, self.wind_direction, self.wind_speed, self.humidity
        )
    }
}
