use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Returned by [`describe_code`] for codes that map to no [`CalculatorError`].
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure categories of the arithmetic operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CalculatorError {
    /// Denominator magnitude below machine epsilon
    #[error("{}", self.as_str())]
    DivisionByZero = 0,

    /// Reserved; no operation produces it yet
    #[error("{}", self.as_str())]
    InvalidOperation = 1,
}

impl CalculatorError {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::DivisionByZero),
            1 => Some(Self::InvalidOperation),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DivisionByZero => "Division by zero error",
            Self::InvalidOperation => "Invalid operation error",
        }
    }
}

/// Describe a raw error code, falling back to [`UNKNOWN_ERROR`].
pub fn describe_code(code: u8) -> &'static str {
    CalculatorError::from_code(code)
        .map(CalculatorError::as_str)
        .unwrap_or(UNKNOWN_ERROR)
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Calculation(#[from] CalculatorError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl AppError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
