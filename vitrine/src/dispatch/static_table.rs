//! Const-constructible factory table.
//!
//! For a registry that is fully known at compile time, the table can be a
//! `static` of fn pointers with no allocation at all. Keys must be sorted so
//! larger tables can use binary search.

use vitrine_core::{ScreenKey, ScreenSource};

/// A fixed-size table of `(key, factory)` pairs known at compile time.
///
/// # Example
///
/// ```rust,ignore
/// static SCREENS: StaticTable<&'static str, Screen, 2> = StaticTable::new([
///     ("sheet", sheet_screen as fn() -> Screen),
///     ("swipe", swipe_screen as fn() -> Screen),
/// ]);
/// ```
///
/// For tiny tables lookup is a linear scan; beyond that it is a binary
/// search over the sorted keys.
pub struct StaticTable<K, S, const N: usize> {
    /// Pairs sorted by key. `new` cannot verify sorting in const context.
    entries: [(K, fn() -> S); N],
}

impl<K: Ord, S, const N: usize> StaticTable<K, S, N> {
    /// Create a table from an array already sorted by key.
    pub const fn new(entries: [(K, fn() -> S); N]) -> Self {
        Self { entries }
    }

    /// Create a table from unsorted pairs, sorting at runtime.
    pub fn new_sorted(mut entries: [(K, fn() -> S); N]) -> Self {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    /// Look up the factory for `key`.
    #[inline]
    pub fn lookup(&self, key: &K) -> Option<fn() -> S> {
        if N <= 4 {
            for (k, factory) in &self.entries {
                if k == key {
                    return Some(*factory);
                }
            }
            None
        } else {
            self.entries
                .binary_search_by(|(k, _)| k.cmp(key))
                .ok()
                .map(|i| self.entries[i].1)
        }
    }

    /// Number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the table is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<K, S, const N: usize> ScreenSource<K, S> for StaticTable<K, S, N>
where
    K: ScreenKey + Ord,
{
    fn create(&self, key: &K) -> Option<S> {
        self.lookup(key).map(|factory| factory())
    }

    fn covers(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }
}

/// Declare a `static` [`StaticTable`], sorting is the caller's concern.
///
/// # Example
///
/// ```rust,ignore
/// static_table! {
///     pub SCREENS: &'static str => Screen {
///         "sheet" => sheet_screen,
///         "swipe" => swipe_screen,
///     }
/// }
/// ```
#[macro_export]
macro_rules! static_table {
    (
        $vis:vis $name:ident: $key:ty => $screen:ty {
            $($k:expr => $f:expr),+ $(,)?
        }
    ) => {
        $vis static $name: $crate::dispatch::StaticTable<$key, $screen, { $crate::static_table!(@count $($k),+) }> =
            $crate::dispatch::StaticTable::new([
                $(($k, $f as fn() -> $screen)),+
            ]);
    };
    (@count $($x:expr),*) => {
        <[()]>::len(&[$($crate::static_table!(@replace $x ())),*])
    };
    (@replace $ignored:tt $sub:expr) => { $sub };
}

#[cfg(test)]
mod tests {
    use super::{ScreenSource, StaticTable};

    #[test]
    fn small_table_linear_lookup() {
        let table: StaticTable<&str, i32, 3> =
            StaticTable::new([("apple", || 1), ("banana", || 2), ("cherry", || 3)]);

        assert_eq!(table.create(&"apple"), Some(1));
        assert_eq!(table.create(&"cherry"), Some(3));
        assert_eq!(table.create(&"durian"), None);
        assert!(table.covers(&"banana"));
    }

    #[test]
    fn large_table_binary_search() {
        fn f0() -> i32 {
            0
        }
        fn f1() -> i32 {
            10
        }
        fn f2() -> i32 {
            20
        }
        fn f3() -> i32 {
            30
        }
        fn f4() -> i32 {
            40
        }
        fn f5() -> i32 {
            50
        }

        let table: StaticTable<i32, i32, 6> =
            StaticTable::new([(0, f0), (1, f1), (2, f2), (3, f3), (4, f4), (5, f5)]);

        for i in 0..6 {
            assert_eq!(table.create(&i), Some(i * 10));
        }
        assert_eq!(table.create(&6), None);
        assert_eq!(table.create(&-1), None);
    }

    #[test]
    fn new_sorted_accepts_unsorted_input() {
        let table: StaticTable<i32, &str, 5> = StaticTable::new_sorted([
            (3, || "three"),
            (1, || "one"),
            (5, || "five"),
            (2, || "two"),
            (4, || "four"),
        ]);

        assert_eq!(table.create(&1), Some("one"));
        assert_eq!(table.create(&5), Some("five"));
        assert_eq!(table.create(&6), None);
    }

    #[test]
    fn empty_table() {
        let table: StaticTable<&str, i32, 0> = StaticTable::new([]);
        assert!(table.is_empty());
        assert_eq!(table.create(&"anything"), None);
    }
}
