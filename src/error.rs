//! Input error types.

use derive_more::{Display, Error};

/// Failure while soliciting a move from an input collaborator.
#[derive(Debug, Display, Error)]
pub enum InputError {
    /// The player typed something that is not an integer.
    #[display("Value must be an integer, got {input:?}")]
    NotAnInteger {
        /// The offending text, trimmed.
        input: String,
    },

    /// The player typed a number that does not address a row or column.
    #[display("Value {value} is outside a {size}x{size} board")]
    OutOfRange {
        /// The number typed.
        value: i64,
        /// Side length of the board.
        size: usize,
    },

    /// The input stream itself failed.
    #[display("Failed to read input: {source}")]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl InputError {
    /// Returns true if the game loop should re-prompt instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InputError::NotAnInteger { .. } | InputError::OutOfRange { .. }
        )
    }
}

impl From<std::io::Error> for InputError {
    fn from(source: std::io::Error) -> Self {
        InputError::Io { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_parse_errors_are_recoverable() {
        let parse = InputError::NotAnInteger { input: "x".to_string() };
        assert!(parse.is_recoverable());
        assert_eq!(parse.to_string(), "Value must be an integer, got \"x\"");

        let range = InputError::OutOfRange { value: 3, size: 3 };
        assert!(range.is_recoverable());
        assert_eq!(range.to_string(), "Value 3 is outside a 3x3 board");

        let io: InputError = std::io::Error::other("closed").into();
        assert!(!io.is_recoverable());
        assert!(std::error::Error::source(&io).is_some());
    }
}
