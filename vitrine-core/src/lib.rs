//! # vitrine-core
//!
//! Core traits for the Vitrine showcase catalog framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! table backends and host integrations that don't need the full `vitrine`
//! implementation.
//!
//! # Two Cores
//!
//! Vitrine is built around two cooperating cores:
//!
//! ## Catalog
//!
//! An append-only, statically declared collection of entry descriptors.
//! Each descriptor carries display metadata plus a discriminator key and a
//! [`LaunchMode`]. The catalog is built once and frozen; it is never mutated
//! at runtime. The catalog types live in the `vitrine` crate; this crate
//! defines the key contract they share ([`ScreenKey`]).
//!
//! ## Dispatch
//!
//! A lookup mechanism mapping a discriminator key to a screen factory.
//! [`ScreenSource`] is the seam between the dispatcher and its table
//! backends; [`NavHost`] is the seam between the dispatcher and the host UI
//! layer that actually presents screens.
//!
//! # Error Types
//!
//! - [`VitrineError`] - Top-level error type
//! - [`BuildError`] - Table construction errors
//! - [`DispatchError`] - Resolution errors
//! - [`CoverageError`] - Aggregate completeness failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod key;
mod screen;

// Re-exports
pub use error::{BuildError, CoverageError, DispatchError, VitrineError};
pub use key::ScreenKey;
pub use screen::{Dispatched, LaunchMode, NavHost, ScreenSource};
