//! Symbol module - process-wide string interning.
//!
//! A [`Symbol`] is a 4-byte handle to a string stored once in the global
//! [`STRING_TABLE`]. Interning the same text twice always yields the same
//! handle, so two symbols are equal exactly when their indices are equal and
//! no comparison ever has to look at the characters again.
//!
//! The lexer builds its token identities on top of this: every keyword,
//! operator and synthetic token category is a symbol, which makes token
//! comparison a single integer compare.
//!
//! # Reserved symbols
//!
//! The synthetic token categories are pre-interned at fixed indices below
//! `RESERVED_SYMBOLS_END`, which lets them be exposed as `const` values:
//!
//! ```
//! use lexis_util::symbol::{Symbol, SYM_EOF, SYM_IDENTIFIER};
//!
//! assert_eq!(Symbol::intern("$eof"), SYM_EOF);
//! assert_eq!(SYM_IDENTIFIER.as_str(), "$identifier");
//! assert!(SYM_EOF.is_known());
//! ```
//!
//! # Thread safety
//!
//! The table is backed by `DashMap`, so interning from several threads at
//! once is fine. Interned strings are leaked and live for the rest of the
//! process.

mod interner;

pub use interner::{StringTable, STRING_TABLE};

use crate::error::{SymbolError, SymbolResult};

/// Statistics about the string interner, for profiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of unique interned strings
    pub count: usize,
    /// Capacity of the forward hash map
    pub capacity: usize,
    /// Lookups that found an existing entry
    pub hits: usize,
    /// Lookups that allocated a new entry
    pub misses: usize,
}

impl InternerStats {
    pub const fn new(count: usize, capacity: usize, hits: usize, misses: usize) -> Self {
        Self {
            count,
            capacity,
            hits,
            misses,
        }
    }

    /// `count / capacity`, or 0.0 for an empty table.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Fraction of lookups served without allocating.
    ///
    /// ```
    /// use lexis_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 90, 10);
    /// assert_eq!(stats.hit_rate(), 0.9);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

/// An interned string.
///
/// `Symbol` is `Copy`, 4 bytes wide, and compares by index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    index: u32,
}

/// End of the index range reserved for pre-interned symbols.
const RESERVED_SYMBOLS_END: u32 = 32;

/// Text of every reserved symbol, in index order.
///
/// Must stay in sync with the `SYM_*` constants below.
pub(crate) const KNOWN_SYMBOLS: [&str; 7] = [
    "$eof",
    "$integer32",
    "$integer64",
    "$float32",
    "$float64",
    "$string literal",
    "$identifier",
];

/// End of input.
pub const SYM_EOF: Symbol = Symbol { index: 0 };
/// 32-bit integer literal.
pub const SYM_INTEGER32: Symbol = Symbol { index: 1 };
/// 64-bit integer literal.
pub const SYM_INTEGER64: Symbol = Symbol { index: 2 };
/// 32-bit float literal.
pub const SYM_FLOAT32: Symbol = Symbol { index: 3 };
/// 64-bit float literal.
pub const SYM_FLOAT64: Symbol = Symbol { index: 4 };
/// String literal.
pub const SYM_STRING_LITERAL: Symbol = Symbol { index: 5 };
/// Any non-keyword identifier.
pub const SYM_IDENTIFIER: Symbol = Symbol { index: 6 };

impl Symbol {
    /// Intern a string, returning its symbol.
    ///
    /// ```
    /// use lexis_util::symbol::Symbol;
    ///
    /// let a = Symbol::intern("processor");
    /// assert_eq!(a, Symbol::intern("processor"));
    /// assert_ne!(a, Symbol::intern("graph"));
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// The interned text, or `""` for an index that was never handed out.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// The interned text, failing for an index that was never handed out.
    pub fn try_as_str(&self) -> SymbolResult<&'static str> {
        STRING_TABLE
            .get(*self)
            .ok_or(SymbolError::NotFound { index: self.index })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Length of the interned text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// True for the pre-interned reserved symbols.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Snapshot of the global interner counters.
    #[inline]
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static_assertions::assert_impl_all!(Symbol: Send, Sync, Copy);
static_assertions::assert_eq_size!(Symbol, u32);
static_assertions::const_assert!(KNOWN_SYMBOLS.len() as u32 <= RESERVED_SYMBOLS_END);
