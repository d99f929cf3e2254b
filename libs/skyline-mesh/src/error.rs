//! # Mesh Errors
//!
//! Error types for mesh construction and serialization.
//!
//! ## Error Policy
//!
//! - Shapes are never silently dropped or repaired
//! - A degenerate triangle fails the shape being built
//! - Errors carry the offending values for debugging

use thiserror::Error;

/// Errors that can occur while building or serializing a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A size passed to a primitive was zero, negative or not finite.
    #[error("Invalid dimensions: {message}")]
    InvalidDimensions { message: String },

    /// A triangle has (near) zero area, an invalid point or a bad normal.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A binary STL stream did not match the expected layout.
    #[error("Malformed STL: {message}")]
    MalformedStl { message: String },

    /// The triangle count does not fit the 32-bit STL count field.
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid dimensions error.
    pub fn invalid_dimensions(message: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a malformed STL error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedStl {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_dimensions("width -1 must be positive");
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("-1"));

        let err = MeshError::TooManyTriangles {
            count: 5_000_000_000,
            max: u32::MAX as usize,
        };
        assert!(err.to_string().contains("5000000000"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
