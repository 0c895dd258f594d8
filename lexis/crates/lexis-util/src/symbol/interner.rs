//! Global string table backing [`Symbol`].
//!
//! Two `DashMap`s are kept side by side: text to index for interning, and
//! index to text for resolving. Both lookups are O(1).

use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::LazyLock;

use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHasher;

use super::{InternerStats, Symbol, KNOWN_SYMBOLS, RESERVED_SYMBOLS_END};

/// The process-wide string table, seeded with the reserved symbols.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    table.initialize_known_symbols();
    table
});

/// Thread-safe string table.
pub struct StringTable {
    /// text -> index
    map: DashMap<&'static str, u32, RandomState>,

    /// index -> text
    strings: DashMap<u32, &'static str, BuildHasherDefault<FxHasher>>,

    /// Next dynamic index; starts at `RESERVED_SYMBOLS_END`.
    next_index: AtomicU32,

    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            strings: DashMap::with_capacity_and_hasher(256, BuildHasherDefault::default()),
            next_index: AtomicU32::new(RESERVED_SYMBOLS_END),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    fn initialize_known_symbols(&self) {
        for (index, &text) in KNOWN_SYMBOLS.iter().enumerate() {
            let index = index as u32;
            self.map.insert(text, index);
            self.strings.insert(index, text);
        }
    }

    /// Intern `string`, allocating a new entry on first sight.
    pub fn intern(&self, string: &str) -> Symbol {
        if let Some(entry) = self.map.get(string) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Symbol {
                index: *entry.value(),
            };
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let interned: &'static str = Box::leak(string.to_owned().into_boxed_str());

        match self.map.entry(interned) {
            // Another thread interned the same text between the lookup and
            // the entry lock; its index wins.
            Entry::Occupied(entry) => Symbol {
                index: *entry.get(),
            },
            Entry::Vacant(entry) => {
                let index = self.next_index.fetch_add(1, Ordering::Relaxed);
                // Publish the reverse mapping before the forward one so any
                // thread that can observe the index can also resolve it.
                self.strings.insert(index, interned);
                entry.insert(index);
                Symbol { index }
            }
        }
    }

    /// Resolve a symbol back to its text.
    pub fn get(&self, symbol: Symbol) -> Option<&'static str> {
        self.strings.get(&symbol.index).map(|entry| *entry.value())
    }

    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.map.len(),
            capacity: self.map.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Number of interned strings, reserved ones included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_intern_same_string() {
        let s1 = STRING_TABLE.intern("hello");
        let s2 = STRING_TABLE.intern("hello");
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_get_string() {
        let symbol = STRING_TABLE.intern("test_string");
        assert_eq!(STRING_TABLE.get(symbol), Some("test_string"));
    }

    #[test]
    fn test_dynamic_indices_start_after_reserved_range() {
        let symbol = STRING_TABLE.intern("definitely_not_reserved");
        assert!(symbol.as_u32() >= RESERVED_SYMBOLS_END);
    }

    #[test]
    fn test_concurrent_distinct_strings() {
        let handles: Vec<_> = (0..20)
            .map(|i| thread::spawn(move || STRING_TABLE.intern(&format!("thread_{}", i))))
            .collect();

        let symbols: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for i in 0..symbols.len() {
            for j in (i + 1)..symbols.len() {
                assert_ne!(symbols[i], symbols[j]);
            }
        }
    }

    #[test]
    fn test_stats_tracking() {
        let before = STRING_TABLE.stats();
        let _ = STRING_TABLE.intern("new_unique_string_12345");
        let _ = STRING_TABLE.intern("new_unique_string_12345");
        let after = STRING_TABLE.stats();

        assert!(after.misses > before.misses);
        assert!(after.hits > before.hits);
        assert!(after.count >= KNOWN_SYMBOLS.len());
        assert!(after.capacity >= after.count);
    }

    #[test]
    fn test_many_strings_resolve() {
        let symbols: Vec<_> = (0..1000)
            .map(|i| STRING_TABLE.intern(&format!("bulk_{}", i)))
            .collect();

        for (i, sym) in symbols.iter().enumerate() {
            let expected = format!("bulk_{}", i);
            assert_eq!(STRING_TABLE.get(*sym), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_unicode_strings() {
        for text in ["你好", "🦀", "Привет", "\u{0}"] {
            let sym = STRING_TABLE.intern(text);
            assert_eq!(STRING_TABLE.get(sym), Some(text));
        }
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StringTable>();
    }
}
