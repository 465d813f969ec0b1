//! Property tests for deck generation and shuffling.

use proptest::prelude::*;

use party_deck::core::{DeckError, DeckRng};
use party_deck::plane::Order;
use party_deck::generate;

fn is_valid_count(count: usize) -> bool {
    (0..=count).any(|n| n * n + n + 1 == count)
}

proptest! {
    #[test]
    fn prop_accepts_exactly_valid_counts(count in 0usize..200) {
        let result = generate(&vec![0u8; count]).map(|deck| deck.len());
        if is_valid_count(count) {
            prop_assert_eq!(result, Ok(count));
        } else {
            prop_assert_eq!(result, Err(DeckError::InvalidDeckSize { count }));
        }
    }

    #[test]
    fn prop_order_round_trips(n in 0usize..2000) {
        let order = Order::new(n);
        prop_assert_eq!(Order::from_symbol_count(order.symbol_count()), Ok(order));
    }

    #[test]
    fn prop_shuffles_keep_the_plane(n in prop::sample::select(vec![2usize, 3, 4, 5, 7, 8]), seed in any::<u64>()) {
        let count = n * n + n + 1;
        let mut deck = generate(&(0..count).collect::<Vec<_>>()).unwrap();
        let mut rng = DeckRng::new(seed);

        deck.shuffle_symbols(&mut rng);
        deck.shuffle_cards(&mut rng);

        prop_assert_eq!(deck.len(), count);
        prop_assert_eq!(deck.verify(), Ok(()));
    }

    #[test]
    fn prop_generation_is_deterministic(n in 0usize..8) {
        let images: Vec<String> = (0..n * n + n + 1).map(|i| format!("{i}")).collect();
        let a = generate(&images).unwrap().to_bytes().unwrap();
        let b = generate(&images).unwrap().to_bytes().unwrap();
        prop_assert_eq!(a, b);
    }
}
