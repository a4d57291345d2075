pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;

pub use calculator::{add, divide, error_to_string, multiply, subtract, Outcome, EPSILON};
pub use config::Config;
pub use error::{describe_code, AppError, CalculatorError, Result};
