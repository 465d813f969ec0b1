//! Python bindings for party-deck.
//!
//! # Quick Start
//!
//! ```python
//! import party_deck
//!
//! party_deck.valid_symbol_counts(60)     # [1, 3, 7, 13, 21, 31, 43, 57]
//!
//! images = [f"img{i}.png" for i in range(57)]
//! cards = party_deck.generate_deck(images)
//!
//! deck = party_deck.SpotItDeck(images, symbols_per_card=8, seed=42)
//! deck.verify()
//! ```

use pyo3::prelude::*;

mod py_deck;
mod py_spot_it;

pub use py_deck::*;
pub use py_spot_it::*;

/// party_deck: matching decks and party game cards.
#[pymodule]
fn party_deck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Deck generation
    m.add_function(wrap_pyfunction!(generate_deck, m)?)?;
    m.add_function(wrap_pyfunction!(order_for, m)?)?;
    m.add_function(wrap_pyfunction!(valid_symbol_counts, m)?)?;

    // Games
    m.add_class::<PySpotItDeck>()?;

    Ok(())
}
