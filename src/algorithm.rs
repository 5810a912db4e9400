//! Algorithm abstraction consumed by the host data-protection layer.

use std::fmt;

use crate::context::EncryptContext;

/// A column-level encrypt algorithm that keeps `LIKE` queries working.
///
/// Implementations must be thread-safe (`Send + Sync`): instances are built
/// once, then shared read-only across any number of query threads.
///
/// # Example
///
/// ```rust,ignore
/// use likedigest::prelude::*;
///
/// let registry = AlgorithmRegistry::default();
/// let algorithm = registry.create("CHAR_DIGEST_LIKE", &Properties::new())?;
/// let ctx = EncryptContext::new("users", "email");
///
/// let digest = algorithm.encrypt(Some(&"alice@example.com"), &ctx);
/// ```
pub trait LikeEncryptAlgorithm: Send + Sync + fmt::Debug {
    /// Stable type identifier used by the registry to select this algorithm.
    fn type_name(&self) -> &'static str;

    /// Digests `plain_value` for storage in a queryable column.
    ///
    /// An absent value passes through as absent; any present value is
    /// stringified and digested. Never fails.
    fn encrypt(
        &self,
        plain_value: Option<&dyn fmt::Display>,
        context: &EncryptContext,
    ) -> Option<String>;

    /// Recovers the comparable form of `cipher_value`.
    ///
    /// One-way algorithms return the input unchanged; a digested column can
    /// only be compared, never read back. Never fails.
    fn decrypt(&self, cipher_value: &str, context: &EncryptContext) -> String;
}
