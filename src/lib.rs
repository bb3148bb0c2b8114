// Practice Drills - Core Library
// Small, independent exercises exposed for the CLI and tests

pub mod blackjack;
pub mod gross_store;
pub mod lasagna;
pub mod logs;
pub mod parsing_log_files;
pub mod the_farm;
pub mod vehicle_purchase;
pub mod weather;
pub mod airport_robot;
pub mod meteorology;
pub mod log_line_parser;
pub mod simple_calculator;
pub mod assembly_line;
pub mod chess;

// Re-export commonly used types
pub use blackjack::{Card, Decision, parse_card, first_turn};
pub use gross_store::{
    Bill, BillError, UnitTable,
    LedgerAction, LedgerEntry, load_ledger,
};
pub use logs::Application;
pub use the_farm::{
    FodderCalculator, FarmError, InvalidCowsError,
    divide_food, validate_input_and_divide_food, validate_number_of_cows,
};
pub use weather::Forecaster;
pub use airport_robot::{Greeter, Italian, Portuguese, say_hello};
pub use meteorology::{
    MeteorologyData, Speed, SpeedUnit, Temperature, TemperatureUnit,
};
pub use log_line_parser::LogLine;
pub use simple_calculator::{CalculatorError, Operation, calculate};
pub use assembly_line::{AssemblyLine, AssemblyLineError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
