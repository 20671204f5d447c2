// cosy-value - Error types for value operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Cosy value operations.

use std::fmt;

/// Result type for Cosy value operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when combining or coercing values.
///
/// Both kinds are raised synchronously and propagate to the immediate
/// caller; neither is retryable without restructuring the operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value whose variant or shape cannot represent a complex number
    ConversionError {
        from: &'static str,
        detail: Option<String>,
    },
    /// Wrong operand type for an operation
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
}

impl Error {
    /// Create a conversion error.
    pub fn conversion(from: &'static str) -> Self {
        Error::ConversionError { from, detail: None }
    }

    /// Create a conversion error with extra detail.
    pub fn conversion_detailed(from: &'static str, detail: impl Into<String>) -> Self {
        Error::ConversionError {
            from,
            detail: Some(detail.into()),
        }
    }

    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConversionError { from, detail } => {
                if let Some(detail) = detail {
                    write!(f, "Cannot convert {} to complex: {}", from, detail)
                } else {
                    write!(f, "Cannot convert {} to complex", from)
                }
            }
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
        }
    }
}

impl std::error::Error for Error {}
