//! Error types for pagekit
//!
//! This module defines the error hierarchy for the whole crate. Errors only
//! arise at construction/validation time and at the CLI boundary; page
//! transitions themselves never fail (invalid input degrades to a no-op or
//! a clamp, see the controller module).

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// A configuration the controller cannot start from
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with it
        message: String,
    },

    /// A page size of zero
    #[error("Invalid page size: {value} (page size must be at least 1)")]
    InvalidPageSize {
        /// The rejected size
        value: u32,
    },

    /// An initial page of zero
    #[error("Invalid initial page: {value} (pages are numbered from 1)")]
    InvalidInitialPage {
        /// The rejected page
        value: u32,
    },

    // ============================================================================
    // CLI Errors
    // ============================================================================
    /// A walk-script action name that is not recognized
    #[error("Unknown walk action: '{action}'")]
    UnknownAction {
        /// The unrecognized action text
        action: String,
    },

    /// A walk-script action whose argument failed to parse
    #[error("Invalid argument for walk action '{action}': {message}")]
    InvalidActionArgument {
        /// The action the argument belongs to
        action: String,
        /// What was expected
        message: String,
    },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// JSON output could not be produced
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-action error
    pub fn unknown_action(action: impl Into<String>) -> Self {
        Self::UnknownAction {
            action: action.into(),
        }
    }

    /// Create an invalid-action-argument error
    pub fn action_argument(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidActionArgument {
            action: action.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::InvalidPageSize { value: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid page size: 0 (page size must be at least 1)"
        );

        let err = Error::InvalidInitialPage { value: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid initial page: 0 (pages are numbered from 1)"
        );
    }

    #[test]
    fn test_cli_error_display() {
        let err = Error::unknown_action("flip");
        assert_eq!(err.to_string(), "Unknown walk action: 'flip'");

        let err = Error::action_argument("goto", "expected a number, got 'x'");
        assert_eq!(
            err.to_string(),
            "Invalid argument for walk action 'goto': expected a number, got 'x'"
        );
    }
}
