//! Invariant checks for a set of cards.
//!
//! Works on symbol identity (`Eq + Hash`), not on positions, so it checks
//! index-level lines and caller-level decks alike. Two equal caller
//! symbols count as the same symbol.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::PlaneViolation;

use super::order::Order;

/// Check that `cards` form a projective plane of `order`.
///
/// In order: card count, card sizes, pairwise intersections, coverage.
/// Returns the first violation found.
pub fn check_plane<T, C>(cards: &[C], order: Order) -> Result<(), PlaneViolation>
where
    T: Eq + Hash,
    C: AsRef<[T]>,
{
    let expected_cards = order.card_count();
    if cards.len() != expected_cards {
        return Err(PlaneViolation::CardCount {
            expected: expected_cards,
            actual: cards.len(),
        });
    }

    check_card_sizes(cards, order.symbols_per_card())?;
    check_intersections(cards)?;
    check_coverage(cards, order.symbols_per_card())
}

/// Every card holds exactly `expected` symbols.
pub fn check_card_sizes<T, C>(cards: &[C], expected: usize) -> Result<(), PlaneViolation>
where
    C: AsRef<[T]>,
{
    for (card, symbols) in cards.iter().enumerate() {
        let actual = symbols.as_ref().len();
        if actual != expected {
            return Err(PlaneViolation::CardSize { card, expected, actual });
        }
    }
    Ok(())
}

/// Every two distinct cards share exactly one symbol.
pub fn check_intersections<T, C>(cards: &[C]) -> Result<(), PlaneViolation>
where
    T: Eq + Hash,
    C: AsRef<[T]>,
{
    let sets: Vec<FxHashSet<&T>> = cards.iter().map(|c| c.as_ref().iter().collect()).collect();

    for first in 0..sets.len() {
        for second in first + 1..sets.len() {
            let shared = sets[first].intersection(&sets[second]).count();
            if shared != 1 {
                return Err(PlaneViolation::Intersection { first, second, shared });
            }
        }
    }
    Ok(())
}

/// Every symbol appears on exactly `expected` cards.
///
/// A violating symbol is reported by its first appearance.
pub fn check_coverage<T, C>(cards: &[C], expected: usize) -> Result<(), PlaneViolation>
where
    T: Eq + Hash,
    C: AsRef<[T]>,
{
    let counts = occurrences(cards);

    for (card, symbols) in cards.iter().enumerate() {
        for (position, symbol) in symbols.as_ref().iter().enumerate() {
            let appearances = counts.get(symbol).copied().unwrap_or(0);
            if appearances != expected {
                return Err(PlaneViolation::Coverage {
                    card,
                    position,
                    appearances,
                    expected,
                });
            }
        }
    }
    Ok(())
}

/// Number of cards each symbol appears on.
pub fn occurrences<T, C>(cards: &[C]) -> FxHashMap<&T, usize>
where
    T: Eq + Hash,
    C: AsRef<[T]>,
{
    let mut counts = FxHashMap::default();
    for symbols in cards {
        for symbol in symbols.as_ref() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
    }
    counts
}
