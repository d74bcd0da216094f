use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Negative operand {value} cannot be converted to binary")]
    NegativeOperand { value: i64 },

    #[error("Invalid binary digit '{digit}' in '{input}'")]
    InvalidBinaryDigit { input: String, digit: char },

    #[error("Binary form of {value} has more digits than fit in a u128")]
    BinaryOverflow { value: i64 },

    #[error("Factorial of {n} does not fit in a u64")]
    FactorialOverflow { n: u32 },

    #[error("Angle must be a finite number, got {value}")]
    NonFiniteAngle { value: f64 },

    #[error("Angle of {degrees} degrees is too large to convert to radians")]
    AngleOutOfRange { degrees: f64 },

    #[error("Sine series for {radians} radians does not give a finite result")]
    SeriesOverflow { radians: f64 },

    #[error("'{expression}' divided by zero")]
    DivisionByZero { expression: String },

    #[error("'{expression}' overflows a 32-bit integer")]
    ArithmeticOverflow { expression: String },

    #[error("Cannot shift by {amount} bits")]
    InvalidShift { amount: i32 },

    #[error("Unknown data type '{name}'")]
    UnknownDataType { name: String },

    #[error("Unknown operator category '{name}'")]
    UnknownCategory { name: String },

    #[error("Failed to read '{token}' as {expected}")]
    InvalidInput { token: String, expected: String },

    #[error("Input ended while waiting for {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Short message for the terminal, without the internal detail of wrapped errors.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(_) => "Could not read input or write output".to_string(),
            CalcError::SerializationError(_) => "Could not render the result as JSON".to_string(),
            CalcError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::NegativeOperand { .. } => "Pass a number greater than or equal to zero",
            CalcError::InvalidBinaryDigit { .. } => "Binary numbers may only contain the digits 0 and 1",
            CalcError::BinaryOverflow { .. } => "Use a number below 2^39",
            CalcError::FactorialOverflow { .. } => "Factorials are only available up to 20!",
            CalcError::NonFiniteAngle { .. } => "Pass the angle in degrees as a regular number",
            CalcError::AngleOutOfRange { .. } | CalcError::SeriesOverflow { .. } => {
                "Reduce the angle to within a few turns, e.g. between -360 and 360"
            }
            CalcError::DivisionByZero { .. } => "Use a non-zero second operand",
            CalcError::ArithmeticOverflow { .. } => "Use smaller operands",
            CalcError::InvalidShift { .. } => "Shift amounts must be between 0 and 31",
            CalcError::UnknownDataType { .. } => "Choose one of: int, float, char, double",
            CalcError::UnknownCategory { .. } => {
                "Choose one of: arithmetic, relational, logical, increment, bitwise, assignment"
            }
            CalcError::InvalidInput { .. } | CalcError::UnexpectedEndOfInput { .. } => {
                "Check the operand on the command line or on standard input"
            }
            CalcError::IoError(_) => "Check that standard input and output are available",
            CalcError::SerializationError(_) => "Try the text output format instead",
            CalcError::TomlError(_)
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => "Fix the configuration file and try again",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::IoError(_) | CalcError::SerializationError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
