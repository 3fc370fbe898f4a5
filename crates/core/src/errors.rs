//! Core error types for the chart data pipeline.
//!
//! Provider traits (trading sessions, benchmark history) return these types.
//! The services catch fetch failures at the call site and degrade to empty
//! state instead of propagating them to the UI layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the chart pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calendar operation failed: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Benchmark operation failed: {0}")]
    Benchmark(#[from] BenchmarkError),

    #[error("Settings store error: {0}")]
    Settings(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

/// Errors raised by the external trading-calendar source.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Trading session fetch failed: {0}")]
    SessionFetch(String),
}

/// Errors raised by the external benchmark sources.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Benchmark fetch failed for '{ticker}': {reason}")]
    Fetch { ticker: String, reason: String },

    #[error("Symphony benchmark fetch failed for '{symphony_id}': {reason}")]
    SymphonyFetch {
        symphony_id: String,
        reason: String,
    },
}
