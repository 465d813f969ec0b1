//! Symbol indexing.
//!
//! A deck is first built over indices `0..N` into the caller's symbol
//! collection, then mapped onto the caller's values. `SymbolIndex` keeps
//! those positions distinct from ordinary integers so construction code
//! cannot mix them up with orders, card numbers or field elements.
//!
//! ## Usage
//!
//! ```
//! use party_deck::core::SymbolIndex;
//!
//! let images = ["cat", "dog", "owl"];
//!
//! let idx = SymbolIndex::new(2);
//! assert_eq!(idx.resolve(&images), &"owl");
//! assert!(SymbolIndex::new(3).checked(images.len()).is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Position of a symbol in the caller's collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolIndex(pub usize);

impl SymbolIndex {
    /// Create a new symbol index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }

    /// Return `Some(self)` if the index addresses a collection of `len` symbols.
    #[must_use]
    pub const fn checked(self, len: usize) -> Option<Self> {
        if self.0 < len {
            Some(self)
        } else {
            None
        }
    }

    /// Look up the symbol this index refers to.
    ///
    /// Panics if the index is out of range. Indices come from the plane
    /// construction, so an out-of-range value is a construction defect
    /// rather than bad caller input.
    #[must_use]
    pub fn resolve<T>(self, symbols: &[T]) -> &T {
        match symbols.get(self.0) {
            Some(symbol) => symbol,
            None => panic!(
                "symbol index {} out of range for {} symbols",
                self.0,
                symbols.len()
            ),
        }
    }
}

impl From<usize> for SymbolIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for SymbolIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}
