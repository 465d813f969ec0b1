//! Deck generation integration tests.
//!
//! Checks the size law, the one-shared-symbol rule and coverage across a
//! sweep of orders, plus the rejection and determinism guarantees.

use party_deck::core::{DeckError, PlaneViolation, SymbolIndex};
use party_deck::plane::{self, Construction, Order};
use party_deck::{generate, ConstructionKind, Deck};

fn items(count: usize) -> Vec<usize> {
    (0..count).collect()
}

fn symbol_count(n: usize) -> usize {
    n * n + n + 1
}

// =============================================================================
// Size Law and Invariants
// =============================================================================

#[test]
fn test_size_law() {
    for n in 0..=10 {
        let deck = generate(&items(symbol_count(n))).unwrap();
        assert_eq!(deck.len(), symbol_count(n), "card count for order {}", n);
        assert!(deck.iter().all(|card| card.len() == n + 1), "card size for order {}", n);
    }
}

#[test]
fn test_pairwise_single_match_for_prime_powers() {
    for n in [0, 1, 2, 3, 4, 5, 7, 8, 9] {
        let deck = generate(&items(symbol_count(n))).unwrap();
        assert!(deck.guarantees_single_match());

        let cards = deck.cards();
        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                assert_eq!(
                    cards[i].shared_with(&cards[j]).len(),
                    1,
                    "order {}: cards {} and {}",
                    n,
                    i,
                    j
                );
            }
        }
    }
}

#[test]
fn test_orders_without_plane_are_flagged() {
    for n in [6, 10] {
        let deck = generate(&items(symbol_count(n))).unwrap();
        assert!(!deck.guarantees_single_match(), "order {} should be flagged", n);
        assert_eq!(deck.kind(), ConstructionKind::Cyclic);
        assert!(matches!(deck.verify(), Err(PlaneViolation::Intersection { .. })));
    }
}

#[test]
fn test_coverage() {
    for n in [2, 3, 4, 5, 7] {
        let deck = generate(&items(symbol_count(n))).unwrap();
        let counts = deck.occurrences();

        assert_eq!(counts.len(), symbol_count(n));
        assert!(counts.values().all(|&c| c == n + 1), "order {}", n);
    }
}

#[test]
fn test_intersection_uses_item_identity() {
    let names: Vec<String> = (0..13).map(|i| format!("photo-{i}.jpg")).collect();
    let deck = generate(&names).unwrap();

    let first = &deck.cards()[0];
    for other in &deck.cards()[1..] {
        let shared = first.matching_symbol(other).unwrap();
        assert!(other.contains(shared));
    }
    assert_eq!(deck.verify(), Ok(()));
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_rejects_invalid_sizes() {
    for count in [0, 2, 5, 10, 30, 56, 58] {
        assert_eq!(
            generate(&items(count)).map(|d| d.len()),
            Err(DeckError::InvalidDeckSize { count }),
            "count {}",
            count
        );
    }
}

#[test]
fn test_accepts_valid_sizes() {
    for count in [1, 3, 7, 13, 21, 31, 43, 57] {
        assert!(generate(&items(count)).is_ok(), "count {}", count);
    }
}

#[test]
fn test_error_message_names_count() {
    let err = generate(&items(30)).unwrap_err();
    assert!(err.to_string().contains("30 symbols"));
}

// =============================================================================
// Golden Decks and Scenarios
// =============================================================================

#[test]
fn test_golden_seven() {
    let deck = generate(&items(7)).unwrap();
    let cards: Vec<Vec<usize>> = deck.iter().map(|c| c.symbols().to_vec()).collect();

    assert_eq!(
        cards,
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
fn test_fifty_seven_images() {
    let images: Vec<String> = (0..57).map(|i| format!("img{i:02}.png")).collect();
    let deck = generate(&images).unwrap();

    assert_eq!(deck.order(), Order::new(7));
    assert_eq!(deck.len(), 57);
    assert_eq!(deck.symbols_per_card(), 8);
    assert_eq!(deck.verify(), Ok(()));
    assert!(deck.occurrences().values().all(|&c| c == 8));
}

#[test]
fn test_first_cards_share_first_symbol() {
    let deck = generate(&items(31)).unwrap();
    for card in &deck.cards()[..6] {
        assert_eq!(card.symbols()[0], 0);
    }
}

// =============================================================================
// Constructions
// =============================================================================

#[test]
fn test_prime_field_matches_cyclic() {
    for n in [2, 3, 5, 7, 11] {
        let order = Order::new(n);
        assert_eq!(Construction::for_order(order).lines(), Construction::cyclic(order).lines());
    }
}

#[test]
fn test_cyclic_formula_fails_at_order_four() {
    let order = Order::new(4);
    let cyclic = Construction::cyclic(order).lines();
    assert!(matches!(
        plane::check_plane::<SymbolIndex, _>(&cyclic[..], order),
        Err(PlaneViolation::Intersection { .. })
    ));

    let field = plane::lines(order);
    assert_eq!(plane::check_plane::<SymbolIndex, _>(&field[..], order), Ok(()));
}

// =============================================================================
// Determinism and Snapshots
// =============================================================================

#[test]
fn test_deterministic() {
    let images: Vec<String> = (0..43).map(|i| format!("{i}.jpg")).collect();
    let a = generate(&images).unwrap();
    let b = generate(&images).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
}

#[test]
fn test_snapshot_round_trip() {
    let images: Vec<String> = (0..21).map(|i| format!("{i}.jpg")).collect();
    let deck = generate(&images).unwrap();

    let back: Deck<String> = Deck::from_bytes(&deck.to_bytes().unwrap()).unwrap();
    assert_eq!(back, deck);

    let json = serde_json::to_string(&deck).unwrap();
    let from_json: Deck<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, deck);
}
