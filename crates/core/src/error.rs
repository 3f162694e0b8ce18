//! Error types for the connection core.
//!
//! This module defines one error type per concern:
//!
//! - [`CursorError`] - Pagination cursor decoding failures
//! - [`GlobalIdError`] - Global object identifier decoding failures
//! - [`ArgumentError`] - Connection arguments rejected at the signed boundary
//!
//! Cursor errors never reach the caller of the windowing engine: they are
//! swallowed by [`crate::cursor::offset_with_default`]. They are public so
//! that direct users of the codec can tell the failure modes apart.

use thiserror::Error;

// =============================================================================
// Cursor Errors
// =============================================================================

/// Failure to turn a cursor back into an offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Cursor is not valid standard base64.
    #[error("Invalid cursor encoding: {0}")]
    InvalidEncoding(String),

    /// Decoded cursor bytes are not UTF-8.
    #[error("Invalid cursor: decoded bytes are not UTF-8")]
    InvalidUtf8,

    /// Decoded cursor does not start with the expected prefix.
    #[error("Invalid cursor: missing prefix '{prefix}'")]
    MissingPrefix {
        /// Prefix the cursor was expected to carry.
        prefix: &'static str,
    },

    /// Text after the prefix is not an integer offset.
    #[error("Invalid cursor offset: {0:?}")]
    InvalidOffset(String),
}

// =============================================================================
// Global ID Errors
// =============================================================================

/// Failure to resolve a global object identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlobalIdError {
    /// Identifier is not valid standard base64.
    #[error("Invalid global id encoding: {0}")]
    InvalidEncoding(String),

    /// Decoded identifier bytes are not UTF-8.
    #[error("Invalid global id: decoded bytes are not UTF-8")]
    InvalidUtf8,

    /// Decoded identifier has no `type:id` separator.
    #[error("Invalid global id: missing ':' separator in {0:?}")]
    MissingSeparator(String),
}

// =============================================================================
// Argument Errors
// =============================================================================

/// Connection arguments that cannot be turned into a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// `first` was negative.
    #[error("Argument 'first' must be a non-negative integer, got {0}")]
    NegativeFirst(i32),

    /// `last` was negative.
    #[error("Argument 'last' must be a non-negative integer, got {0}")]
    NegativeLast(i32),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for cursor decoding.
pub type CursorResult<T> = Result<T, CursorError>;

/// Result type for global id decoding.
pub type GlobalIdResult<T> = Result<T, GlobalIdError>;

/// Result type for argument normalization.
pub type ArgumentResult<T> = Result<T, ArgumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_reports_offending_value() {
        let msg = ArgumentError::NegativeFirst(-3).to_string();
        assert!(msg.contains("first") && msg.contains("-3"));

        let msg = ArgumentError::NegativeLast(-1).to_string();
        assert!(msg.contains("last") && msg.contains("-1"));
    }

    #[test]
    fn test_cursor_error_names_expected_prefix() {
        let err = CursorError::MissingPrefix {
            prefix: "arrayconnection:",
        };
        assert!(err.to_string().contains("arrayconnection:"));
    }

    #[test]
    fn test_global_id_error_keeps_decoded_text() {
        let err = GlobalIdError::MissingSeparator("Ship".into());
        assert!(err.to_string().contains("\"Ship\""));
    }
}
