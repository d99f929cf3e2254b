//! # Model Errors
//!
//! Error types for input validation, asset loading and producer assembly.
//!
//! ## Error Policy
//!
//! - Structurally invalid input is always fatal and reported before any
//!   geometry is built
//! - Asset failures are fatal only to the producer that needed the asset
//! - Producer failures carry the producer name for diagnosis

use skyline_mesh::MeshError;
use thiserror::Error;

use crate::assembler::Producer;

/// Errors that can occur while generating a skyline model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The activity grid, request or options are structurally invalid.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Geometry construction or STL serialization failed.
    #[error(transparent)]
    Geometry(#[from] MeshError),

    /// A font or image asset is missing or cannot be decoded.
    #[error("Asset '{name}' unavailable: {reason}")]
    AssetUnavailable { name: String, reason: String },

    /// A producer failed; wraps the underlying error.
    #[error("Failed to generate {producer} geometry: {source}")]
    Producer {
        producer: Producer,
        #[source]
        source: Box<ModelError>,
    },

    /// A producer task ended without sending its result.
    #[error("The {producer} producer ended without reporting a result")]
    ProducerLost { producer: Producer },

    /// The options document is not valid JSON for [`crate::SkylineOptions`].
    #[error("Invalid options: {0}")]
    Options(#[from] serde_json::Error),
}

impl ModelError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an asset unavailable error.
    pub fn asset_unavailable(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::AssetUnavailable {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Wraps `self` with the name of the producer that raised it.
    pub fn in_producer(self, producer: Producer) -> Self {
        Self::Producer {
            producer,
            source: Box::new(self),
        }
    }
}

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
