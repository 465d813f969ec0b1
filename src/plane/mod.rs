//! Finite projective planes.
//!
//! The matching game is a projective plane in disguise: symbols are
//! points, cards are lines, and "two lines meet in exactly one point" is
//! "two cards share exactly one symbol". This module works purely on
//! symbol indices; `deck` maps the result onto caller values.
//!
//! - `order`: the order `n` and the `N = n^2 + n + 1` size law
//! - `field`: GF(p^m) arithmetic for prime-power orders
//! - `construction`: the two-phase line construction
//! - `verify`: invariant checks over any set of cards

pub mod order;
pub mod field;
pub mod construction;
pub mod verify;

pub use order::{valid_symbol_counts, Order};
pub use field::GaloisField;
pub use construction::{lines, Construction, ConstructionKind, Line};
pub use verify::{check_plane, occurrences};
