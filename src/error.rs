use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow computing {operation}({input})")]
    Overflow { operation: &'static str, input: i64 },

    #[error("Invalid digit '{character}' in '{text}'")]
    InvalidDigit { character: char, text: String },
}

impl NumberError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn overflow(operation: &'static str, input: i64) -> Self {
        Self::Overflow { operation, input }
    }

    pub fn invalid_digit(character: char, text: impl Into<String>) -> Self {
        Self::InvalidDigit {
            character,
            text: text.into(),
        }
    }
}

pub type NumberResult<T> = std::result::Result<T, NumberError>;
