//! The catalog: an append-only, build-then-freeze registry of entries.
//!
//! A [`Catalog`] is declared once (typically at startup, from static
//! literals), frozen by [`CatalogBuilder::build`], and never mutated
//! afterwards. Ordering is load-bearing: groups appear in declared order and
//! entries within a group in insertion order, reflecting chronological
//! release notes. Growth across releases happens only through source edits
//! adding new literals.

mod entry;

use std::collections::HashMap;

use vitrine_core::ScreenKey;

pub use entry::{Category, Entry};

/// A named, ordered sequence of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K: ScreenKey> {
    name: String,
    entries: Vec<Entry<K>>,
}

impl<K: ScreenKey> Group<K> {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry. Insertion order is preserved in the catalog.
    pub fn entry(mut self, entry: Entry<K>) -> Self {
        self.entries.push(entry);
        self
    }

    /// The group's name (e.g. a year or release label).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group's entries in insertion order.
    pub fn entries(&self) -> &[Entry<K>] {
        &self.entries
    }

    /// Number of entries in the group.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for constructing a [`Catalog`].
///
/// Groups are concatenated in the order they are added; `build` freezes the
/// result.
#[derive(Debug)]
pub struct CatalogBuilder<K: ScreenKey> {
    groups: Vec<Group<K>>,
}

impl<K: ScreenKey> Default for CatalogBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ScreenKey> CatalogBuilder<K> {
    /// Create a new empty catalog builder.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a group after all previously added groups.
    pub fn group(mut self, group: Group<K>) -> Self {
        self.groups.push(group);
        self
    }

    /// Freeze the catalog.
    ///
    /// Infallible: duplicate keys across entries are legal when they
    /// intentionally share one screen; completeness against a dispatcher is
    /// checked separately via `Dispatcher::verify`.
    pub fn build(self) -> Catalog<K> {
        Catalog {
            groups: self.groups,
        }
    }
}

/// The frozen catalog: all groups in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<K: ScreenKey> {
    groups: Vec<Group<K>>,
}

impl<K: ScreenKey> Catalog<K> {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder<K> {
        CatalogBuilder::new()
    }

    /// The groups in declared order.
    pub fn groups(&self) -> &[Group<K>] {
        &self.groups
    }

    /// All entries: the concatenation of every group in declared order.
    ///
    /// Pure and deterministic; two calls within a process yield identical
    /// sequences.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<K>> {
        self.groups.iter().flat_map(|g| g.entries().iter())
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }

    /// Partition all entries by their [`Category`].
    ///
    /// Every entry appears in exactly one bucket. Bucket order is the
    /// first-occurrence order of each category in [`Catalog::entries`], and
    /// entries within a bucket keep their catalog order.
    pub fn by_category(&self) -> Vec<(Category<K>, Vec<&Entry<K>>)> {
        let mut index: HashMap<Category<K>, usize> = HashMap::new();
        let mut buckets: Vec<(Category<K>, Vec<&Entry<K>>)> = Vec::new();

        for entry in self.entries() {
            let category = entry.category();
            let slot = match index.get(&category) {
                Some(&i) => i,
                None => {
                    let i = buckets.len();
                    index.insert(category.clone(), i);
                    buckets.push((category, Vec::new()));
                    i
                }
            };
            buckets[slot].1.push(entry);
        }

        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Category, Entry, Group};

    fn sample() -> Catalog<&'static str> {
        Catalog::builder()
            .group(
                Group::new("2024")
                    .entry(Entry::new("sheet-basic", "Sheet", "Basic sheet").with_sub_category("BottomSheet"))
                    .entry(Entry::new("swipe", "Swipe", "Swipe to reveal")),
            )
            .group(
                Group::new("2025")
                    .entry(Entry::new("sheet-nested", "Nested sheet", "Nested variant").with_sub_category("BottomSheet")),
            )
            .build()
    }

    #[test]
    fn entries_concatenate_groups_in_declared_order() {
        let catalog = sample();
        let keys: Vec<_> = catalog.entries().map(|e| *e.key()).collect();
        assert_eq!(keys, vec!["sheet-basic", "swipe", "sheet-nested"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn by_category_merges_shared_and_keeps_first_occurrence_order() {
        let catalog = sample();
        let grouped = catalog.by_category();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, Category::Shared("BottomSheet".to_string()));
        assert_eq!(grouped[0].1.len(), 2);
        assert_eq!(grouped[1].0, Category::Solo("swipe"));
        assert_eq!(grouped[1].1.len(), 1);
    }

    #[test]
    fn empty_catalog() {
        let catalog: Catalog<&'static str> = Catalog::builder().build();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.by_category().is_empty());
    }
}
