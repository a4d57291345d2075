//! Pure floating point arithmetic. Only [`divide`] can fail.

use crate::error::CalculatorError;

/// Either a value or the reason the operation refused to produce one.
pub type Outcome<T> = std::result::Result<T, CalculatorError>;

/// Denominators with a magnitude below this are treated as zero.
pub const EPSILON: f64 = f64::EPSILON;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Fails with [`CalculatorError::DivisionByZero`] when `|b| < EPSILON`, so tiny
/// nonzero denominators such as `1e-20` are rejected too. A NaN denominator
/// passes the check and yields NaN.
pub fn divide(a: f64, b: f64) -> Outcome<f64> {
    if b.abs() < EPSILON {
        return Err(CalculatorError::DivisionByZero);
    }

    Ok(a / b)
}

/// Human-readable description of an error.
pub fn error_to_string(error: CalculatorError) -> String {
    error.as_str().to_string()
}
