//! Registry resolving algorithm type identifiers to instances.
//!
//! The host data-protection layer configures each column with an algorithm
//! type string and a property bag; the registry turns that pair into a
//! ready-to-use algorithm instance.

use std::collections::HashMap;

use crate::algorithm::LikeEncryptAlgorithm;
use crate::char_digest::{self, CharDigestLike};
use crate::error::Error;
use crate::props::Properties;

/// Constructs an algorithm instance from its configuration properties.
pub type AlgorithmFactory = fn(&Properties) -> Result<Box<dyn LikeEncryptAlgorithm>, Error>;

/// Maps algorithm type identifiers to their factories.
///
/// # Example
///
/// ```
/// use likedigest::props::Properties;
/// use likedigest::registry::AlgorithmRegistry;
///
/// let registry = AlgorithmRegistry::default();
/// let algorithm = registry.create("CHAR_DIGEST_LIKE", &Properties::new())?;
///
/// assert_eq!(algorithm.type_name(), "CHAR_DIGEST_LIKE");
/// # Ok::<(), likedigest::error::Error>(())
/// ```
pub struct AlgorithmRegistry {
    factories: HashMap<&'static str, AlgorithmFactory>,
}

impl AlgorithmRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { factories: HashMap::new() }
    }

    /// Registers a factory under `type_name`, replacing any previous entry.
    pub fn register(&mut self, type_name: &'static str, factory: AlgorithmFactory) {
        self.factories.insert(type_name, factory);
    }

    /// Builds the algorithm registered under `type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithmType`] if no factory is registered
    /// under `type_name`, or the factory's initialization error if the
    /// properties are invalid.
    pub fn create(
        &self,
        type_name: &str,
        props: &Properties,
    ) -> Result<Box<dyn LikeEncryptAlgorithm>, Error> {
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| Error::UnknownAlgorithmType(type_name.to_string()))?;
        factory(props)
    }

    /// Returns `true` if a factory is registered under `type_name`.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Returns the registered type identifiers, in arbitrary order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

impl Default for AlgorithmRegistry {
    /// Registry with all built-in algorithms registered.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(char_digest::ALGORITHM_TYPE, |props| {
            Ok(Box::new(CharDigestLike::new(props)?))
        });
        registry
    }
}
