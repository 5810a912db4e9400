//! # `likedigest`
//!
//! Character-substitution digest that lets `LIKE`-style substring queries
//! run against encrypted database columns without exposing plaintext.
//!
//! ## Features
//!
//! - Deterministic, length-preserving per-character digest
//! - SQL wildcard (`%`) preservation, including collision fallback
//! - Configurable offset, bitmask, base offset and character dictionary
//! - Built-in dictionary of 3726 CJK ideographs, indexed once per process
//! - Registry seam for selection by algorithm type string
//!
//! The digest is a comparison-only representation, not confidentiality-grade
//! encryption: decryption returns its input unchanged.
//!
//! ## Example
//!
//! ```rust,ignore
//! use likedigest::prelude::*;
//!
//! let registry = AlgorithmRegistry::default();
//! let algorithm = registry.create("CHAR_DIGEST_LIKE", &Properties::new())?;
//! let ctx = EncryptContext::new("users", "email");
//!
//! let digest = algorithm.encrypt(Some(&"alice@example.com"), &ctx);
//! ```

#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithm;
pub mod char_digest;
pub mod context;
pub mod dict;
pub mod error;
pub mod props;
pub mod registry;

pub mod prelude {
    //! Convenience re-exports for common use.
    pub use crate::algorithm::LikeEncryptAlgorithm;
    pub use crate::char_digest::CharDigestLike;
    pub use crate::context::EncryptContext;
    pub use crate::error::Error;
    pub use crate::props::Properties;
    pub use crate::registry::AlgorithmRegistry;
}
