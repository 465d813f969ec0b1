//! A single card of a matching deck.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SymbolIndex;

/// An ordered set of symbols printed on one card.
///
/// SmallVec keeps the product's card sizes (up to 8 symbols) inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<T> {
    symbols: SmallVec<[T; 8]>,
}

impl<T> Card<T> {
    /// Create a card from symbols in display order.
    pub fn new(symbols: impl IntoIterator<Item = T>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Map an index-level line onto the caller's symbols.
    pub(crate) fn from_line(line: &[SymbolIndex], symbols: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(line.iter().map(|index| index.resolve(symbols).clone()))
    }

    /// Symbols in display order.
    #[must_use]
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.symbols.iter()
    }

    #[must_use]
    pub fn contains(&self, symbol: &T) -> bool
    where
        T: PartialEq,
    {
        self.symbols.contains(symbol)
    }

    /// Symbols printed on both cards, in this card's order.
    #[must_use]
    pub fn shared_with<'a>(&'a self, other: &Card<T>) -> Vec<&'a T>
    where
        T: PartialEq,
    {
        self.symbols.iter().filter(|s| other.contains(s)).collect()
    }

    /// The one symbol two cards of a valid deck have in common.
    ///
    /// This is the answer a player has to spot. Returns `None` unless the
    /// cards share exactly one symbol.
    #[must_use]
    pub fn matching_symbol<'a>(&'a self, other: &Card<T>) -> Option<&'a T>
    where
        T: PartialEq,
    {
        match self.shared_with(other).as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }

    pub(crate) fn symbols_mut(&mut self) -> &mut [T] {
        &mut self.symbols
    }

    /// Apply `f` to every symbol.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Card<U> {
        Card::new(self.symbols.iter().map(f))
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.symbols.into_vec()
    }
}

impl<T> AsRef<[T]> for Card<T> {
    fn as_ref(&self) -> &[T] {
        &self.symbols
    }
}

impl<'a, T> IntoIterator for &'a Card<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
