//! HashMap-backed factory table.
//!
//! This is the default backend that requires no external dependencies and
//! accepts arbitrary closures as factories.

use std::collections::HashMap;

use vitrine_core::{BuildError, ScreenKey, ScreenSource};

/// A screen factory: invoked once per resolution to construct a fresh screen.
pub type ScreenFactory<S> = Box<dyn Fn() -> S + Send + Sync>;

/// A frozen map of discriminator keys to boxed screen factories.
///
/// Built once by [`FactoryMapBuilder`]; never mutated afterwards. This is the
/// registered-handler form of dispatch: instead of an inline branch that must
/// be kept in sync by hand, the map is checked for completeness against the
/// catalog in a startup assertion or test.
pub struct FactoryMap<K: ScreenKey, S> {
    map: HashMap<K, ScreenFactory<S>>,
}

impl<K: ScreenKey, S> FactoryMap<K, S> {
    /// Start building a factory map.
    pub fn builder() -> FactoryMapBuilder<K, S> {
        FactoryMapBuilder::new()
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no keys are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: ScreenKey, S> ScreenSource<K, S> for FactoryMap<K, S> {
    fn create(&self, key: &K) -> Option<S> {
        self.map.get(key).map(|factory| factory())
    }

    fn covers(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

/// Builder for [`FactoryMap`].
///
/// Rejects duplicate keys: two factories for one key would make dispatch
/// ambiguous, which is a defect prevented at construction rather than
/// handled at runtime.
pub struct FactoryMapBuilder<K: ScreenKey, S> {
    map: HashMap<K, ScreenFactory<S>>,
}

impl<K: ScreenKey, S> Default for FactoryMapBuilder<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ScreenKey, S> FactoryMapBuilder<K, S> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register a factory for `key`.
    pub fn register<F>(&mut self, key: K, factory: F) -> Result<(), BuildError>
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        if self.map.contains_key(&key) {
            return Err(BuildError::DuplicateKey(format!("{key:?}")));
        }
        self.map.insert(key, Box::new(factory));
        Ok(())
    }

    /// Freeze the map.
    pub fn build(self) -> FactoryMap<K, S> {
        FactoryMap { map: self.map }
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildError, FactoryMap, ScreenSource};

    #[test]
    fn create_and_covers() {
        let mut builder = FactoryMap::builder();
        builder.register("home", || 1).unwrap();
        builder.register("about", || 2).unwrap();
        let map = builder.build();

        assert_eq!(map.len(), 2);
        assert_eq!(map.create(&"home"), Some(1));
        assert_eq!(map.create(&"about"), Some(2));
        assert_eq!(map.create(&"missing"), None);
        assert!(map.covers(&"home"));
        assert!(!map.covers(&"missing"));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut builder = FactoryMap::builder();
        builder.register("key", || 1).unwrap();

        let result = builder.register("key", || 2);
        assert!(matches!(result, Err(BuildError::DuplicateKey(_))));
    }

    #[test]
    fn factories_construct_fresh_screens() {
        let mut builder = FactoryMap::builder();
        builder.register("counter", || vec![0u8; 4]).unwrap();
        let map = builder.build();

        let a = map.create(&"counter").unwrap();
        let b = map.create(&"counter").unwrap();
        assert_eq!(a, b);
    }
}
