//! Per-session navigation state machine.
//!
//! `Catalog -> (select, in-place success) -> Example -> (back) -> Catalog`.
//!
//! The session is single-threaded from this crate's point of view: the host
//! UI's event loop serializes selection events, and nothing here blocks or
//! suspends. Terminal state is process exit.

use tracing::debug;
use vitrine_core::{Dispatched, DispatchError, NavHost, ScreenKey, ScreenSource};

use crate::catalog::Entry;
use crate::dispatch::Dispatcher;

/// Where a navigation session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState<K: ScreenKey> {
    /// The catalog list is shown.
    Catalog,
    /// An entry's screen is shown in place of the catalog.
    Example(K),
}

/// Tracks catalog/example transitions around a [`Dispatcher`].
///
/// Transitions happen only on successful dispatch; a failed dispatch leaves
/// the state untouched. Standalone launches never change the in-place state,
/// since the launched context is independently backed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSession<K: ScreenKey> {
    state: NavState<K>,
}

impl<K: ScreenKey> Default for NavSession<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ScreenKey> NavSession<K> {
    /// Start a session showing the catalog.
    pub fn new() -> Self {
        Self {
            state: NavState::Catalog,
        }
    }

    /// The current state.
    pub fn state(&self) -> &NavState<K> {
        &self.state
    }

    /// Handle a selection event: dispatch `entry` and advance the state.
    ///
    /// Only a successful in-place dispatch moves the session to
    /// [`NavState::Example`]; launches and failures leave it where it was.
    pub fn select<T, S, H>(
        &mut self,
        dispatcher: &Dispatcher<T>,
        entry: &Entry<K>,
        host: &mut H,
    ) -> Result<Dispatched, DispatchError>
    where
        T: ScreenSource<K, S>,
        H: NavHost<K, S>,
    {
        let outcome = dispatcher.dispatch(entry, host)?;
        if outcome == Dispatched::Shown {
            self.state = NavState::Example(entry.key().clone());
            debug!(key = ?entry.key(), "session entered example");
        }
        Ok(outcome)
    }

    /// Handle a back action: return to the catalog.
    ///
    /// Returns `true` if the session left an example, `false` if the catalog
    /// was already shown (the host decides what back means then, e.g. exit).
    pub fn back(&mut self) -> bool {
        match self.state {
            NavState::Example(_) => {
                self.state = NavState::Catalog;
                debug!("session returned to catalog");
                true
            }
            NavState::Catalog => false,
        }
    }
}
