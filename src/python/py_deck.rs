//! Deck generation bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::deck::generate;
use crate::plane::{self, Order};

pub(crate) fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// Deal a matching deck from `items`.
///
/// Returns one list of items per card. Raises ValueError unless
/// `len(items)` is `n^2 + n + 1`.
#[pyfunction]
pub fn generate_deck(items: Vec<String>) -> PyResult<Vec<Vec<String>>> {
    let deck = generate(&items).map_err(value_error)?;
    Ok(deck.into_cards().into_iter().map(|card| card.into_vec()).collect())
}

/// The order `n` for a symbol count, or ValueError.
#[pyfunction]
pub fn order_for(count: usize) -> PyResult<usize> {
    Order::from_symbol_count(count).map(Order::value).map_err(value_error)
}

/// Valid symbol counts up to and including `limit`.
#[pyfunction]
pub fn valid_symbol_counts(limit: usize) -> Vec<usize> {
    plane::valid_symbol_counts().take_while(|&count| count <= limit).collect()
}
