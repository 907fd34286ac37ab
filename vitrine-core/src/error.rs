//! Error types for Vitrine.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`VitrineError`] - Top-level error type for all Vitrine operations
//! - [`BuildError`] - Errors while constructing a factory table
//! - [`DispatchError`] - Errors while resolving a discriminator key
//! - [`CoverageError`] - Aggregate catalog/dispatcher completeness failures
//!
//! Every variant here is a programmer error: the catalog and the tables are
//! both static, compiled-in data, so nothing in this hierarchy is expected to
//! reach a released build. Keys are carried as their `Debug` rendering so the
//! error types stay free of the key type parameter.

use thiserror::Error;

/// Top-level error type for all Vitrine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VitrineError {
    /// An error occurred while building a factory table.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// An error occurred while resolving a key.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A catalog failed its completeness check.
    #[error("coverage error: {0}")]
    Coverage(#[from] CoverageError),
}

/// Errors that can occur while building a factory table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Two factories were registered for one key, making dispatch ambiguous.
    #[error("duplicate factory registered for key: {0}")]
    DuplicateKey(String),
}

/// Errors that can occur while resolving a discriminator key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No factory is registered for the key.
    ///
    /// A completeness defect: the catalog names a key the table never
    /// covered. Fatal during development; silently ignoring it would leave
    /// the user stuck on an unresponsive catalog entry.
    #[error("no screen registered for key: {0}")]
    Unresolved(String),
}

/// Aggregate failure from verifying a catalog against a dispatcher.
///
/// Collects every uncovered key in catalog order so a single test run or
/// startup assertion reports the full gap, not just the first hit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("catalog keys without a registered screen: {}", .missing.join(", "))]
pub struct CoverageError {
    /// `Debug` renderings of every uncovered key, first occurrence first.
    pub missing: Vec<String>,
}
