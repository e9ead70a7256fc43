//! Error types for valuation models.

use thiserror::Error;

/// Result type for valuation operations.
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Errors raised by invalid model assumptions.
///
/// Missing snapshot data is never an error; models return `None` instead.
#[derive(Debug, Error, PartialEq)]
pub enum ValuationError {
    /// Discount rate not above terminal growth
    #[error(
        "Discount rate ({discount_rate}) must exceed terminal growth ({terminal_growth})"
    )]
    InvalidDiscountRate {
        /// Discount rate supplied
        discount_rate: f64,
        /// Terminal growth supplied
        terminal_growth: f64,
    },

    /// Invalid model input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown multiple name
    #[error("Unknown multiple: {0} (expected P/E, P/S or EV/EBITDA)")]
    UnknownMultiple(String),
}
