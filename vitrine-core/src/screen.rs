//! Screen dispatch seam traits.
//!
//! The "screen" is deliberately opaque at this layer: table backends produce
//! it, the host presents it, and nothing in between inspects it. Vitrine only
//! coordinates *which* screen is produced and *how* it is presented.

use crate::key::ScreenKey;

/// How selecting a catalog entry presents its screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaunchMode {
    /// Replace the currently displayed content within the same back stack.
    ///
    /// The catalog keeps its back-stack entry, so a back action returns to it.
    #[default]
    InPlace,

    /// Launch an independently backed top-level context.
    ///
    /// The new context receives the discriminator key and re-resolves it
    /// itself; it does not share the catalog's back stack.
    Standalone,
}

/// The outcome of a successful dispatch.
///
/// Exactly one of these happens per dispatch; a failed dispatch produces
/// neither effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// Content was swapped in place.
    Shown,
    /// A standalone context was asked to launch.
    Launched,
}

/// The navigation boundary supplied by the host UI layer.
///
/// Both methods are fire-and-forget handoffs: the dispatcher does not wait
/// for rendering to complete and has no view into the host's event loop.
/// The host is responsible for serializing selection events and debouncing
/// redundant navigation.
pub trait NavHost<K: ScreenKey, S> {
    /// Swap the currently displayed content for `screen`, preserving the
    /// caller's back-stack entry.
    fn show(&mut self, screen: S);

    /// Launch an independent top-level context for `key`.
    ///
    /// The launched context re-resolves the key against its own dispatcher.
    fn launch(&mut self, key: &K);
}

/// A source of screens keyed by discriminator.
///
/// Backends are lookup tables built once and never mutated: a `HashMap` of
/// boxed factories, a const-sorted array of fn pointers, or a perfect-hash
/// map. The dispatcher treats them uniformly through this trait.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot produce screens for keys of type `{K}`",
    label = "missing `ScreenSource` implementation",
    note = "Implement `ScreenSource<{K}, S>` or use one of the provided table backends."
)]
pub trait ScreenSource<K: ScreenKey, S>: Send + Sync {
    /// Construct the screen registered for `key`, or `None` if uncovered.
    fn create(&self, key: &K) -> Option<S>;

    /// Whether `key` has a registered factory.
    ///
    /// The default constructs and drops a screen; backends with a cheaper
    /// membership test should override it.
    fn covers(&self, key: &K) -> bool {
        self.create(key).is_some()
    }
}

// Forwarding impls so tables can be held by reference or smart pointer,
// e.g. a `static` table shared by several dispatchers.

impl<'a, K: ScreenKey, S, T: ScreenSource<K, S>> ScreenSource<K, S> for &'a T {
    fn create(&self, key: &K) -> Option<S> {
        (**self).create(key)
    }

    fn covers(&self, key: &K) -> bool {
        (**self).covers(key)
    }
}

impl<K: ScreenKey, S, T: ScreenSource<K, S>> ScreenSource<K, S> for Box<T> {
    fn create(&self, key: &K) -> Option<S> {
        (**self).create(key)
    }

    fn covers(&self, key: &K) -> bool {
        (**self).covers(key)
    }
}

impl<K: ScreenKey, S, T: ScreenSource<K, S>> ScreenSource<K, S> for std::sync::Arc<T> {
    fn create(&self, key: &K) -> Option<S> {
        (**self).create(key)
    }

    fn covers(&self, key: &K) -> bool {
        (**self).covers(key)
    }
}
