//! Schema-construction errors.
//!
//! Validation outcomes are values ([`crate::foundation::ErrorMap`]), never
//! `Err`. The only fallible surface is building a schema, e.g. compiling
//! a user-supplied regex for [`crate::validators::pattern`].

use thiserror::Error;

/// Error raised while constructing a validation schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A user-supplied regular expression failed to compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}
