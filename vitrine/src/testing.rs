//! Testing utilities.
//!
//! [`RecordingHost`] stands in for the host UI layer in tests, recording
//! every show and launch it receives so dispatch effects can be asserted.

use vitrine_core::{NavHost, ScreenKey};

/// A [`NavHost`] that records every handoff.
///
/// # Example
///
/// ```rust,ignore
/// let mut host = RecordingHost::new();
/// dispatcher.dispatch(&entry, &mut host)?;
/// assert_eq!(host.shown().len(), 1);
/// assert!(host.launched().is_empty());
/// ```
#[derive(Debug)]
pub struct RecordingHost<K: ScreenKey, S> {
    shown: Vec<S>,
    launched: Vec<K>,
}

impl<K: ScreenKey, S> Default for RecordingHost<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ScreenKey, S> RecordingHost<K, S> {
    /// Create an empty recording host.
    pub fn new() -> Self {
        Self {
            shown: Vec::new(),
            launched: Vec::new(),
        }
    }

    /// Screens shown in place, in order.
    pub fn shown(&self) -> &[S] {
        &self.shown
    }

    /// Keys launched as standalone contexts, in order.
    pub fn launched(&self) -> &[K] {
        &self.launched
    }

    /// Total number of handoffs received.
    pub fn handoffs(&self) -> usize {
        self.shown.len() + self.launched.len()
    }
}

impl<K: ScreenKey, S> NavHost<K, S> for RecordingHost<K, S> {
    fn show(&mut self, screen: S) {
        self.shown.push(screen);
    }

    fn launch(&mut self, key: &K) {
        self.launched.push(key.clone());
    }
}
