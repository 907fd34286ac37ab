//! Screen dispatch: resolve a discriminator key to a screen and hand it to
//! the host.
//!
//! The [`Dispatcher`] wraps any [`ScreenSource`] table backend and adds the
//! dispatch protocol on top:
//!
//! - **Resolution before side effects.** `dispatch` is atomic: either the
//!   key resolves and exactly one host handoff happens, or it fails and the
//!   host is never touched.
//! - **Completeness checking.** [`Dispatcher::verify`] asserts every catalog
//!   key is covered, for use in a startup assertion or test.
//!
//! Backends:
//!
//! - [`FactoryMap`] - the default, a frozen `HashMap` of boxed factories
//! - [`StaticTable`] - const-constructible fn-pointer table
//! - `PhfTable` *(feature `phf`)* - compile-time perfect hash map
//! - `collect_screens` *(feature `inventory`)* - distributed registration

mod factory_map;
mod static_table;

#[cfg(feature = "inventory")]
mod collected;
#[cfg(feature = "phf")]
mod phf_table;

use tracing::{debug, error};
use vitrine_core::{CoverageError, Dispatched, DispatchError, LaunchMode, NavHost, ScreenKey, ScreenSource};

use crate::catalog::{Catalog, Entry};

pub use factory_map::{FactoryMap, FactoryMapBuilder, ScreenFactory};
pub use static_table::StaticTable;

#[cfg(feature = "inventory")]
pub use collected::{ScreenRegistration, collect_screens};
#[cfg(feature = "phf")]
pub use phf_table::PhfTable;

/// Resolves catalog entries against a table backend and hands screens to the
/// host.
///
/// Holds no mutable state: the wrapped source is immutable, so concurrent
/// `resolve` calls (e.g. a rapid double-tap) are safe by construction and
/// each independently succeed. Debouncing is the host's concern.
pub struct Dispatcher<T> {
    source: T,
}

impl<T> Dispatcher<T> {
    /// Wrap a table backend.
    pub fn new(source: T) -> Self {
        Self { source }
    }

    /// Borrow the wrapped source.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> T {
        self.source
    }

    /// Resolve `key` to a freshly constructed screen.
    ///
    /// An unresolved key is a completeness defect, not a user-facing error:
    /// the catalog and the table are both static, so this can only be a
    /// missing registration.
    pub fn resolve<K, S>(&self, key: &K) -> Result<S, DispatchError>
    where
        K: ScreenKey,
        T: ScreenSource<K, S>,
    {
        match self.source.create(key) {
            Some(screen) => {
                debug!(?key, "resolved screen");
                Ok(screen)
            }
            None => {
                error!(?key, "no screen registered for key");
                Err(DispatchError::Unresolved(format!("{key:?}")))
            }
        }
    }

    /// Dispatch a selected entry to the host.
    ///
    /// Atomic: the key is resolved (or coverage-checked) before any host
    /// handoff, so a failure leaves the catalog shown and the host untouched.
    /// On success exactly one of the two effects happens:
    ///
    /// - [`LaunchMode::InPlace`]: the screen is constructed and passed to
    ///   [`NavHost::show`], swapping content while preserving the caller's
    ///   back-stack entry.
    /// - [`LaunchMode::Standalone`]: the key is passed to
    ///   [`NavHost::launch`]; the new context re-resolves it independently.
    pub fn dispatch<K, S, H>(&self, entry: &Entry<K>, host: &mut H) -> Result<Dispatched, DispatchError>
    where
        K: ScreenKey,
        T: ScreenSource<K, S>,
        H: NavHost<K, S>,
    {
        match entry.launch_mode() {
            LaunchMode::InPlace => {
                let screen = self.resolve(entry.key())?;
                host.show(screen);
                debug!(key = ?entry.key(), "content swapped in place");
                Ok(Dispatched::Shown)
            }
            LaunchMode::Standalone => {
                if !self.source.covers(entry.key()) {
                    error!(key = ?entry.key(), "no screen registered for key");
                    return Err(DispatchError::Unresolved(format!("{:?}", entry.key())));
                }
                host.launch(entry.key());
                debug!(key = ?entry.key(), "standalone context launched");
                Ok(Dispatched::Launched)
            }
        }
    }

    /// Check that every key in `catalog` is covered by the source.
    ///
    /// Collects all uncovered keys (deduplicated, first occurrence first)
    /// rather than stopping at the first gap. Intended as a startup
    /// assertion or an exhaustiveness test.
    pub fn verify<K, S>(&self, catalog: &Catalog<K>) -> Result<(), CoverageError>
    where
        K: ScreenKey,
        T: ScreenSource<K, S>,
    {
        let mut missing: Vec<String> = Vec::new();
        for entry in catalog.entries() {
            if !self.source.covers(entry.key()) {
                let rendered = format!("{:?}", entry.key());
                if !missing.contains(&rendered) {
                    missing.push(rendered);
                }
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            error!(?missing, "catalog keys without a registered screen");
            Err(CoverageError { missing })
        }
    }
}
