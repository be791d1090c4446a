//! Error types for band construction and configuration.
//!
//! The per-frame path has no recoverable errors: a body that is not ready
//! skips its step and self-heals next frame. Errors surface only from
//! construction and validation.

use core::fmt;

/// Errors that can occur while building or configuring the band.
#[derive(Debug, Clone, PartialEq)]
pub enum LanyardError {
    /// Ribbon sample count must be at least 2.
    InvalidSampleCount,
    /// Smoothing speeds must satisfy 0 < min <= max.
    InvalidSmoothingSpeeds,
    /// Rope segment length must be positive.
    InvalidRopeLength,
    /// A joint referenced a body that is not in the world yet.
    BodyOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for LanyardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanyardError::InvalidSampleCount => {
                write!(f, "ribbon sample count must be at least 2")
            }
            LanyardError::InvalidSmoothingSpeeds => {
                write!(f, "smoothing speeds must satisfy 0 < min <= max")
            }
            LanyardError::InvalidRopeLength => {
                write!(f, "rope segment length must be positive")
            }
            LanyardError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
