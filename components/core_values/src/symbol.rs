//! Symbol primitive type and well-known symbols.
//!
//! Symbols are unique, immutable primitive values usable as property keys.
//! Besides freshly created symbols, a fixed set of well-known symbols is
//! shared process-wide: the iteration-protocol keys, the observable
//! subscription key, and the string-tag override key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Well-known symbol storage
static WELL_KNOWN_SYMBOLS: LazyLock<WellKnownSymbols> = LazyLock::new(|| WellKnownSymbols {
    iterator: SymbolValue::create_well_known("Symbol.iterator"),
    async_iterator: SymbolValue::create_well_known("Symbol.asyncIterator"),
    observable: SymbolValue::create_well_known("Symbol.observable"),
    to_string_tag: SymbolValue::create_well_known("Symbol.toStringTag"),
});

/// Storage for well-known symbols
struct WellKnownSymbols {
    iterator: SymbolValue,
    async_iterator: SymbolValue,
    observable: SymbolValue,
    to_string_tag: SymbolValue,
}

/// A unique symbol value.
///
/// Each symbol has a unique internal ID and an optional description for
/// debugging. Equality is by ID, never by description.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    /// Unique identifier for this symbol
    id: u64,
    /// Optional description for debugging
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with optional description.
    pub fn new(description: Option<String>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue { id, description }
    }

    /// Create a well-known symbol (internal use only)
    fn create_well_known(description: &str) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue {
            id,
            description: Some(description.to_string()),
        }
    }

    /// The well-known iteration-protocol symbol.
    pub fn iterator() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.iterator.clone()
    }

    /// The well-known asynchronous iteration-protocol symbol.
    pub fn async_iterator() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.async_iterator.clone()
    }

    /// The well-known observable subscription symbol.
    pub fn observable() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.observable.clone()
    }

    /// The well-known string-tag override symbol.
    pub fn to_string_tag() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.to_string_tag.clone()
    }

    /// Get the unique ID of this symbol.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl std::fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) if !desc.is_empty() => write!(f, "Symbol({})", desc),
            _ => write!(f, "Symbol()"),
        }
    }
}
