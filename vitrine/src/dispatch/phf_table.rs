//! PHF-backed factory table.
//!
//! Wraps a compile-time perfect hash map of string keys to fn-pointer
//! factories. Immutable by construction; there is no builder because PHF
//! maps are generated at compile time.

use vitrine_core::ScreenSource;

/// A factory table backed by a static `phf::Map`.
pub struct PhfTable<S: 'static> {
    map: &'static phf::Map<&'static str, fn() -> S>,
}

impl<S: 'static> PhfTable<S> {
    /// Wrap a static PHF map of factories.
    pub const fn new(map: &'static phf::Map<&'static str, fn() -> S>) -> Self {
        Self { map }
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

impl<S: 'static> ScreenSource<&'static str, S> for PhfTable<S> {
    fn create(&self, key: &&'static str) -> Option<S> {
        self.map.get(key).map(|factory| factory())
    }

    fn covers(&self, key: &&'static str) -> bool {
        self.map.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::{PhfTable, ScreenSource};
    use phf::phf_map;

    fn home() -> i32 {
        1
    }
    fn about() -> i32 {
        2
    }

    static SCREENS: phf::Map<&'static str, fn() -> i32> = phf_map! {
        "home" => home,
        "about" => about,
    };

    #[test]
    fn phf_lookup() {
        let table = PhfTable::new(&SCREENS);

        assert_eq!(table.len(), 2);
        assert_eq!(table.create(&"home"), Some(1));
        assert_eq!(table.create(&"about"), Some(2));
        assert_eq!(table.create(&"contact"), None);
        assert!(table.covers(&"home"));
        assert!(!table.covers(&"contact"));
    }
}
