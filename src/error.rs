//! Error types for `likedigest` operations.

/// Main error type for `likedigest` operations.
///
/// Digest and decrypt calls are total and never fail; errors can only arise
/// while constructing an algorithm or resolving one through the registry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Algorithm construction failed due to an invalid option value.
    #[error("algorithm `{algorithm}` initialization failed: {reason}")]
    AlgorithmInitialization {
        /// Type identifier of the algorithm being constructed.
        algorithm: &'static str,
        /// Field-specific failure message.
        reason: String,
    },

    /// No algorithm with the requested type identifier is registered.
    #[error("unknown algorithm type: {0}")]
    UnknownAlgorithmType(String),
}

impl Error {
    /// Creates an initialization error for the given algorithm type.
    pub fn initialization(algorithm: &'static str, reason: impl Into<String>) -> Self {
        Self::AlgorithmInitialization { algorithm, reason: reason.into() }
    }
}
