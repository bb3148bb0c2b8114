// 🐄 The Farm - Fodder division with validated cow counts

use anyhow::Result;
use thiserror::Error;

/// Source of fodder figures. Implementations may fail (e.g. a broken scale).
pub trait FodderCalculator {
    /// Total fodder needed for `cows`
    fn fodder_amount(&self, cows: i32) -> Result<f64>;

    /// Multiplier applied to the fodder amount
    fn fattening_factor(&self) -> Result<f64>;
}

#[derive(Debug, Error)]
pub enum FarmError {
    #[error("invalid number of cows")]
    InvalidNumberOfCows,

    #[error(transparent)]
    Calculator(#[from] anyhow::Error),
}

/// Rejected cow count with the reason it was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{cows} cows are invalid: {message}")]
pub struct InvalidCowsError {
    pub cows: i32,
    pub message: &'static str,
}

/// Fodder per cow. Calculator failures are passed through unchanged.
pub fn divide_food(calc: &dyn FodderCalculator, cows: i32) -> Result<f64, FarmError> {
    let fodder = calc.fodder_amount(cows)?;
    let factor = calc.fattening_factor()?;

    Ok(fodder * factor / f64::from(cows))
}

/// Like `divide_food`, but refuses non-positive counts before asking the calculator
pub fn validate_input_and_divide_food(calc: &dyn FodderCalculator, cows: i32) -> Result<f64, FarmError> {
    if cows <= 0 {
        return Err(FarmError::InvalidNumberOfCows);
    }
    divide_food(calc, cows)
}

pub fn validate_number_of_cows(cows: i32) -> Result<(), InvalidCowsError> {
    match cows {
        c if c < 0 => Err(InvalidCowsError {
            cows,
            message: "there are no negative cows",
        }),
        0 => Err(InvalidCowsError {
            cows,
            message: "no cows don't need food",
        }),
        _ => Ok(()),
    }
}
