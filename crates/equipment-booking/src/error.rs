//! Error types for equipment-booking boundary operations.
//!
//! The engine itself cannot fail; errors only arise while turning external
//! strings (day strings, device JSON) into typed values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;
