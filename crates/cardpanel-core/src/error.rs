use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Identifier errors
    #[error("Invalid card ID '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Card ID must be between 1 and 4294967295 (0x00000001 to 0xFFFFFFFF), got {value}")]
    OutOfRange { value: u64 },

    // Input validation errors
    #[error("{0}")]
    Validation(String),

    #[error("Cannot remove admin card ({hex} / {decimal}) - this card is protected")]
    ProtectedCard { hex: String, decimal: u32 },

    // Remote device errors
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a parse error for the given raw input.
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Build a transport error without an HTTP status (connection failures, bad bodies).
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Returns `true` for errors caused by what the user typed rather than by the device.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::OutOfRange { .. } | Error::Validation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
