// 🏭 Assembly Line - Production rates by speed setting

use thiserror::Error;

pub const CARS_PER_HOUR: u32 = 221;
pub const MAX_SPEED: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("speed must be between 1 and {max}, got {speed}")]
pub struct AssemblyLineError {
    pub speed: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyLine {
    speed: u8,
}

impl AssemblyLine {
    pub fn new(speed: u8) -> Result<Self, AssemblyLineError> {
        if !(1..=MAX_SPEED).contains(&speed) {
            return Err(AssemblyLineError { speed, max: MAX_SPEED });
        }
        Ok(AssemblyLine { speed })
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Fraction of cars that come off the line without faults
    pub fn success_rate(&self) -> f64 {
        match self.speed {
            1..=4 => 1.0,
            5..=8 => 0.9,
            9 => 0.8,
            _ => 0.77,
        }
    }

    pub fn production_rate_per_hour(&self) -> f64 {
        f64::from(self.speed) * f64::from(CARS_PER_HOUR) * self.success_rate()
    }

    /// Whole cars per minute; the hourly rate is truncated first
    pub fn working_items_per_minute(&self) -> u32 {
        self.production_rate_per_hour() as u32 / 60
    }
}
