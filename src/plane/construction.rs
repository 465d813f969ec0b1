//! Index-level construction of a projective plane.
//!
//! Points are symbol indices `0..N`, lines are cards. The layout:
//!
//! - index `0` is the point where all vertical lines meet,
//! - indices `1..=n` are the points at infinity, one per slope,
//! - indices `n + 1..N` are affine points, `n` blocks of `n`; block `k`
//!   (1-based) is the column `x = k - 1`.
//!
//! Phase 1 produces the `n + 1` lines through point 0: the line at
//! infinity `[0, 1..=n]` and the vertical lines `[0, block i]`.
//! Phase 2 produces the `n^2` remaining lines `y = s*x + c`, each through
//! its slope's point at infinity. The only difference between the two
//! constructions is the arithmetic used for `s*x + c`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SymbolIndex;

use super::field::GaloisField;
use super::order::Order;

/// One line of the plane as symbol indices.
pub type Line = SmallVec<[SymbolIndex; 8]>;

/// Arithmetic used for the sloped lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionKind {
    /// Integers mod `n`. A plane for `n < 2` and prime `n`.
    Cyclic,
    /// GF(p^m). A plane for every prime power.
    GaloisField,
}

/// Plane construction for one order.
#[derive(Clone, Debug)]
pub struct Construction {
    order: Order,
    field: Option<GaloisField>,
}

impl Construction {
    /// Choose the construction for `order`.
    ///
    /// Prime powers `p^m` with `m >= 2` get field arithmetic. Everything
    /// else uses the cyclic formula: for primes and orders below 2 that is
    /// already a plane; for the remaining orders no plane is available and
    /// the result only satisfies the size and coverage laws.
    #[must_use]
    pub fn for_order(order: Order) -> Self {
        let field = match order.prime_power() {
            Some((p, m)) if m >= 2 => Some(GaloisField::new(p, m)),
            _ => None,
        };
        Self { order, field }
    }

    /// The cyclic formula regardless of order.
    #[must_use]
    pub fn cyclic(order: Order) -> Self {
        Self { order, field: None }
    }

    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    #[must_use]
    pub fn kind(&self) -> ConstructionKind {
        if self.field.is_some() {
            ConstructionKind::GaloisField
        } else {
            ConstructionKind::Cyclic
        }
    }

    /// Whether every pair of lines meets in exactly one point.
    #[must_use]
    pub fn guarantees_single_match(&self) -> bool {
        let n = self.order.value();
        self.field.is_some() || n < 2 || self.order.prime_power().is_some_and(|(_, m)| m == 1)
    }

    /// All `n^2 + n + 1` lines, phase 1 first.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let lines: Vec<Line> = self.iter_lines().collect();
        debug_assert_eq!(lines.len(), self.order.symbol_count());
        lines
    }

    /// Lines one at a time, in the order `lines` returns them.
    pub fn iter_lines(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.order.value();
        let count = self.order.symbol_count();

        // Phase 1: lines through point 0.
        let through_zero = (0..=n).map(move |i| {
            let mut line = Line::with_capacity(n + 1);
            line.push(self.point(0, count));
            line.extend((1..=n).map(|j| self.point(i * n + j, count)));
            line
        });

        // Phase 2: one line per (slope a, intercept b).
        let sloped = (1..=n).flat_map(move |a| {
            (1..=n).map(move |b| {
                let mut line = Line::with_capacity(n + 1);
                line.push(self.point(a, count));
                line.extend((1..=n).map(|k| {
                    let y = self.offset(a, k - 1, b - 1);
                    self.point(n + 1 + n * (k - 1) + y, count)
                }));
                line
            })
        });

        through_zero.chain(sloped)
    }

    /// `y = slope * x + intercept` in this construction's arithmetic.
    fn offset(&self, slope: usize, x: usize, intercept: usize) -> usize {
        let n = self.order.value();
        match &self.field {
            Some(field) => field.add(field.mul(slope % n, x), intercept),
            None => (slope * x + intercept) % n,
        }
    }

    fn point(&self, raw: usize, count: usize) -> SymbolIndex {
        match SymbolIndex::new(raw).checked(count) {
            Some(index) => index,
            None => panic!(
                "{} construction produced index {raw} outside 0..{count}",
                self.order
            ),
        }
    }
}

/// Lines of the plane of `order`, with the construction `for_order` picks.
#[must_use]
pub fn lines(order: Order) -> Vec<Line> {
    Construction::for_order(order).lines()
}
