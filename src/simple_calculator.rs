// ➗ Simple Calculator - Whitelisted integer operations

use std::str::FromStr;
use thiserror::Error;

pub const DIVISION_BY_ZERO_MESSAGE: &str = "Division by zero is not allowed.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("unsupported operation: {0:?}")]
    UnsupportedOperation(String),

    #[error("{first} {operation} {second} overflows")]
    Overflow {
        first: i64,
        operation: char,
        second: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Add),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            other => Err(CalculatorError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Evaluate `first op second` and describe it as "a op b = answer".
///
/// Division by zero is reported as a message, not an error.
pub fn calculate(first: i64, second: i64, operation: &str) -> Result<String, CalculatorError> {
    let op: Operation = operation.parse()?;

    let answer = match op {
        Operation::Add => first.checked_add(second),
        Operation::Multiply => first.checked_mul(second),
        Operation::Divide if second == 0 => return Ok(DIVISION_BY_ZERO_MESSAGE.to_string()),
        Operation::Divide => first.checked_div(second),
    };

    let answer = answer.ok_or(CalculatorError::Overflow {
        first,
        operation: op.symbol(),
        second,
    })?;

    Ok(format!("{} {} {} = {}", first, op.symbol(), second, answer))
}
