//! Plane order.
//!
//! A projective plane of order `n` has `n^2 + n + 1` points and as many
//! lines, with `n + 1` points on every line. In deck terms: `n^2 + n + 1`
//! symbols, the same number of cards, `n + 1` symbols per card.
//!
//! ```
//! use party_deck::plane::Order;
//!
//! let order = Order::from_symbol_count(57).unwrap();
//! assert_eq!(order.value(), 7);
//! assert_eq!(order.symbols_per_card(), 8);
//! assert_eq!(order.card_count(), 57);
//!
//! assert!(Order::from_symbol_count(30).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::DeckError;

/// Order `n` of a finite projective plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Order(pub usize);

impl Order {
    /// Create an order directly.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self(n)
    }

    /// Derive the order from a symbol count `N = n^2 + n + 1`.
    ///
    /// The square root only proposes a candidate; acceptance is by exact
    /// integer equality. The candidate is nudged by one step in either
    /// direction if floating-point rounding put it off by one, so very
    /// large counts are still judged exactly.
    pub fn from_symbol_count(count: usize) -> Result<Self, DeckError> {
        let invalid = DeckError::InvalidDeckSize { count };
        if count == 0 {
            return Err(invalid);
        }

        let discriminant = 1.0 + 4.0 * (count - 1) as f64;
        let mut n = ((-1.0 + discriminant.sqrt()) / 2.0).floor() as usize;

        while n > 0 && symbol_count_for(n).map_or(true, |c| c > count) {
            n -= 1;
        }
        while symbol_count_for(n + 1).is_some_and(|c| c <= count) {
            n += 1;
        }

        match symbol_count_for(n) {
            Some(c) if c == count => Ok(Self(n)),
            _ => Err(invalid),
        }
    }

    /// Order whose cards hold `k` symbols (`n = k - 1`). `None` for `k == 0`.
    #[must_use]
    pub const fn from_symbols_per_card(k: usize) -> Option<Self> {
        if k == 0 {
            None
        } else {
            Some(Self(k - 1))
        }
    }

    /// The raw order `n`.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Number of symbols, `n^2 + n + 1`.
    ///
    /// Panics on overflow; no usable deck comes close.
    #[must_use]
    pub fn symbol_count(self) -> usize {
        match symbol_count_for(self.0) {
            Some(count) => count,
            None => panic!("order {} overflows the symbol count", self.0),
        }
    }

    /// Number of cards. Equal to the symbol count.
    #[must_use]
    pub fn card_count(self) -> usize {
        self.symbol_count()
    }

    /// Symbols on each card, `n + 1`.
    #[must_use]
    pub const fn symbols_per_card(self) -> usize {
        self.0 + 1
    }

    /// `Some((p, m))` when `n = p^m` for a prime `p` and `m >= 1`.
    #[must_use]
    pub fn prime_power(self) -> Option<(usize, u32)> {
        prime_power(self.0)
    }

    /// Whether a plane of this order is known to be constructible here.
    ///
    /// True for orders 0 and 1 (degenerate planes) and every prime power.
    /// False otherwise: no plane of order 6 or 10 exists, and none is
    /// known for any order that is not a prime power.
    #[must_use]
    pub fn guarantees_single_match(self) -> bool {
        self.0 < 2 || self.prime_power().is_some()
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order({})", self.0)
    }
}

/// All valid deck sizes in increasing order: 1, 3, 7, 13, 21, 31, ...
pub fn valid_symbol_counts() -> impl Iterator<Item = usize> {
    (0usize..).map_while(symbol_count_for)
}

fn symbol_count_for(n: usize) -> Option<usize> {
    n.checked_mul(n)?.checked_add(n)?.checked_add(1)
}

/// Decompose `n` as `p^m` by trial division.
pub(crate) fn prime_power(n: usize) -> Option<(usize, u32)> {
    if n < 2 {
        return None;
    }

    let mut p = 2;
    while p <= n / p && n % p != 0 {
        p += 1;
    }
    if n % p != 0 {
        // No factor up to sqrt(n): n is prime.
        return Some((n, 1));
    }

    let mut rest = n;
    let mut m = 0;
    while rest % p == 0 {
        rest /= p;
        m += 1;
    }
    if rest == 1 {
        Some((p, m))
    } else {
        None
    }
}
