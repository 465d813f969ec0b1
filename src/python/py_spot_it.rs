//! Spot-it bindings for Python.

use pyo3::prelude::*;

use crate::core::DeckRng;
use crate::deck::Deck;
use crate::games::{build_spot_it, SpotItConfig};

use super::py_deck::value_error;

/// Python wrapper for a spot-it deck over image paths.
#[pyclass(name = "SpotItDeck")]
pub struct PySpotItDeck {
    deck: Deck<String>,
}

#[pymethods]
impl PySpotItDeck {
    /// Build a shuffled spot-it deck.
    ///
    /// # Arguments
    /// - images: exactly `k^2 - k + 1` image paths
    /// - symbols_per_card: pictures per card (`k`); sizes without a
    ///   single-match deck, such as 7, raise ValueError
    /// - seed: RNG seed for the per-card picture shuffle
    #[new]
    #[pyo3(signature = (images, symbols_per_card = 8, seed = 42))]
    fn new(images: Vec<String>, symbols_per_card: usize, seed: u64) -> PyResult<Self> {
        let config = SpotItConfig::default().with_symbols_per_card(symbols_per_card);
        let deck = build_spot_it(&config, &images, &DeckRng::new(seed)).map_err(value_error)?;
        Ok(Self { deck })
    }

    /// Cards as lists of image paths.
    #[getter]
    fn cards(&self) -> Vec<Vec<String>> {
        self.deck.iter().map(|card| card.symbols().to_vec()).collect()
    }

    #[getter]
    fn order(&self) -> usize {
        self.deck.order().value()
    }

    /// Raise ValueError if any two cards do not share exactly one image.
    fn verify(&self) -> PyResult<()> {
        self.deck.verify().map_err(value_error)
    }

    fn __len__(&self) -> usize {
        self.deck.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SpotItDeck(cards={}, symbols_per_card={})",
            self.deck.len(),
            self.deck.symbols_per_card()
        )
    }
}
