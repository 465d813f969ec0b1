//! Deck generation.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DeckError, DeckRng, PlaneViolation};
use crate::plane::{self, Construction, ConstructionKind, Order};

use super::card::Card;

/// A full matching deck.
///
/// Holds `n^2 + n + 1` cards of `n + 1` symbols each. When
/// `guarantees_single_match()` is true any two cards share exactly one
/// symbol (given distinct input symbols).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<T> {
    cards: Vec<Card<T>>,
    order: Order,
    kind: ConstructionKind,
}

/// Generate a matching deck from `symbols`.
///
/// `symbols.len()` must be `n^2 + n + 1` for some `n >= 0`; anything else
/// fails with `DeckError::InvalidDeckSize` carrying the count. Symbols are
/// cloned into the cards and never inspected; the input is not modified.
/// The result is fully determined by the input order.
///
/// ```
/// use party_deck::generate;
///
/// let deck = generate(&[0, 1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(deck.len(), 7);
/// assert_eq!(deck.cards()[0].symbols(), &[0, 1, 2]);
/// assert!(deck.verify().is_ok());
///
/// assert!(generate(&[0; 10]).is_err());
/// ```
pub fn generate<T: Clone>(symbols: &[T]) -> Result<Deck<T>, DeckError> {
    let order = Order::from_symbol_count(symbols.len())?;
    let construction = Construction::for_order(order);

    if !construction.guarantees_single_match() {
        warn!(
            order = order.value(),
            "no projective plane construction for this order; cards may share more or fewer than one symbol"
        );
    }

    let mut cards: Vec<Card<T>> = Vec::with_capacity(order.card_count());
    cards.extend(
        construction
            .iter_lines()
            .map(|line| Card::from_line(&line, symbols)),
    );

    debug!(
        order = order.value(),
        cards = cards.len(),
        symbols_per_card = order.symbols_per_card(),
        kind = ?construction.kind(),
        "generated deck"
    );

    Ok(Deck {
        cards,
        order,
        kind: construction.kind(),
    })
}

impl<T> Deck<T> {
    /// Cards in generation order: the `n + 1` cards sharing the first
    /// symbol come first.
    #[must_use]
    pub fn cards(&self) -> &[Card<T>] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card<T>> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card<T>> {
        self.cards.iter()
    }

    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    #[must_use]
    pub fn symbols_per_card(&self) -> usize {
        self.order.symbols_per_card()
    }

    /// Arithmetic the deck was built with.
    #[must_use]
    pub const fn kind(&self) -> ConstructionKind {
        self.kind
    }

    /// Whether the construction promises the single-match property.
    #[must_use]
    pub fn guarantees_single_match(&self) -> bool {
        self.order.guarantees_single_match()
    }

    /// Shuffle the symbols within every card, independently per card.
    ///
    /// Only positions change, so every invariant is kept. This is the
    /// display randomization applied after generation.
    pub fn shuffle_symbols(&mut self, rng: &mut DeckRng) {
        for card in &mut self.cards {
            rng.shuffle(card.symbols_mut());
        }
    }

    /// Shuffle the order of the cards.
    pub fn shuffle_cards(&mut self, rng: &mut DeckRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Apply `f` to every symbol on every card.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Deck<U> {
        Deck {
            cards: self.cards.iter().map(|card| card.map(&mut f)).collect(),
            order: self.order,
            kind: self.kind,
        }
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card<T>> {
        self.cards
    }
}

impl<T: Eq + Hash> Deck<T> {
    /// Check every deck invariant against symbol identity.
    pub fn verify(&self) -> Result<(), PlaneViolation> {
        plane::check_plane::<T, Card<T>>(&self.cards, self.order)
    }

    /// Number of cards each symbol appears on.
    #[must_use]
    pub fn occurrences(&self) -> FxHashMap<&T, usize> {
        plane::occurrences::<T, Card<T>>(&self.cards)
    }
}

impl<T: Serialize> Deck<T> {
    /// Compact binary snapshot for handing the deck to an export process.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }
}

impl<T: DeserializeOwned> Deck<T> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl<'a, T> IntoIterator for &'a Deck<T> {
    type Item = &'a Card<T>;
    type IntoIter = std::slice::Iter<'a, Card<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    fn as_vecs(deck: &Deck<usize>) -> Vec<Vec<usize>> {
        deck.iter().map(|c| c.symbols().to_vec()).collect()
    }

    #[test]
    fn test_generate_seven() {
        let deck = generate(&numbers(7)).unwrap();

        assert_eq!(deck.order(), Order(2));
        assert_eq!(deck.kind(), ConstructionKind::Cyclic);
        assert_eq!(
            as_vecs(&deck),
            vec![
                vec![0, 1, 2],
                vec![0, 3, 4],
                vec![0, 5, 6],
                vec![1, 3, 6],
                vec![1, 4, 5],
                vec![2, 3, 5],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_generate_maps_symbols() {
        let names: Vec<String> = (0..7).map(|i| format!("img{i}")).collect();
        let deck = generate(&names).unwrap();

        assert_eq!(deck.cards()[3].symbols(), &["img1", "img3", "img6"]);
        // Input untouched.
        assert_eq!(names[0], "img0");
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(generate(&numbers(30)), Err(DeckError::InvalidDeckSize { count: 30 }));
        assert_eq!(generate::<u8>(&[]), Err(DeckError::InvalidDeckSize { count: 0 }));
    }

    #[test]
    fn test_single_symbol_deck() {
        let deck = generate(&["only"]).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards()[0].symbols(), &["only"]);
        assert!(deck.verify().is_ok());
    }

    #[test]
    fn test_order_four_uses_field() {
        let deck = generate(&numbers(21)).unwrap();
        assert_eq!(deck.kind(), ConstructionKind::GaloisField);
        assert!(deck.guarantees_single_match());
        assert_eq!(deck.verify(), Ok(()));
    }

    #[test]
    fn test_order_six_is_flagged() {
        let deck = generate(&numbers(43)).unwrap();
        assert_eq!(deck.len(), 43);
        assert!(!deck.guarantees_single_match());
        assert!(matches!(deck.verify(), Err(PlaneViolation::Intersection { .. })));
    }

    #[test]
    fn test_shuffle_symbols_keeps_sets() {
        let mut deck = generate(&numbers(13)).unwrap();
        let before = deck.clone();

        deck.shuffle_symbols(&mut DeckRng::new(42));

        assert_ne!(deck, before);
        for (shuffled, original) in deck.iter().zip(before.iter()) {
            let mut a = shuffled.symbols().to_vec();
            let mut b = original.symbols().to_vec();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
        assert!(deck.verify().is_ok());
    }

    #[test]
    fn test_shuffle_cards_keeps_invariants() {
        let mut deck = generate(&numbers(31)).unwrap();
        deck.shuffle_cards(&mut DeckRng::new(3));
        assert_eq!(deck.len(), 31);
        assert!(deck.verify().is_ok());
    }

    #[test]
    fn test_map() {
        let deck = generate(&numbers(7)).unwrap();
        let labels = deck.map(|i| i * 10);
        assert_eq!(labels.cards()[1].symbols(), &[0, 30, 40]);
        assert_eq!(labels.order(), deck.order());
    }

    #[test]
    fn test_bytes_round_trip() {
        let deck = generate(&numbers(13)).unwrap();
        let bytes = deck.to_bytes().unwrap();
        let back: Deck<usize> = Deck::from_bytes(&bytes).unwrap();
        assert_eq!(back, deck);
    }
}
