//! Finite field arithmetic GF(p^m).
//!
//! The cyclic construction only yields a plane when `n` is prime, because
//! `Z/n` is a field exactly then. For prime powers `n = p^m` we build the
//! same incidence pattern over GF(p^m) instead.
//!
//! Elements are the integers `0..p^m`; the base-`p` digits of an element
//! are the coefficients of a polynomial of degree below `m`, lowest digit
//! first. Addition is digit-wise mod `p`; multiplication is polynomial
//! multiplication reduced by a fixed monic irreducible polynomial of
//! degree `m`.
//!
//! ```
//! use party_deck::plane::GaloisField;
//!
//! let gf4 = GaloisField::new(2, 2);
//! assert_eq!(gf4.size(), 4);
//! // x * x = x + 1 under x^2 + x + 1
//! assert_eq!(gf4.mul(2, 2), 3);
//! assert_eq!(gf4.add(3, 1), 2);
//! ```

use smallvec::SmallVec;

type Poly = SmallVec<[usize; 16]>;

/// The finite field with `p^m` elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaloisField {
    p: usize,
    m: u32,
    size: usize,
    /// Monic irreducible polynomial of degree `m`, lowest coefficient first.
    modulus: Poly,
}

impl GaloisField {
    /// Build GF(p^m).
    ///
    /// `p` must be prime and `m` at least 1; panics otherwise. The modulus
    /// is the first monic irreducible polynomial of degree `m` in base-`p`
    /// counting order, so the field is the same on every call.
    #[must_use]
    pub fn new(p: usize, m: u32) -> Self {
        assert!(m >= 1, "field degree must be at least 1");
        assert!(
            super::order::prime_power(p) == Some((p, 1)),
            "field characteristic {p} is not prime"
        );

        let size = p.pow(m);
        let modulus = find_irreducible(p, m as usize);
        Self { p, m, size, modulus }
    }

    /// Field for a prime-power order, `None` for any other order.
    #[must_use]
    pub fn for_order(n: usize) -> Option<Self> {
        super::order::prime_power(n).map(|(p, m)| Self::new(p, m))
    }

    /// Number of elements, `p^m`.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Characteristic `p`.
    #[must_use]
    pub const fn characteristic(&self) -> usize {
        self.p
    }

    /// Extension degree `m`.
    #[must_use]
    pub const fn degree(&self) -> u32 {
        self.m
    }

    /// Coefficients of the reduction polynomial, lowest first.
    #[must_use]
    pub fn modulus(&self) -> &[usize] {
        &self.modulus
    }

    /// Field addition.
    #[must_use]
    pub fn add(&self, a: usize, b: usize) -> usize {
        debug_assert!(a < self.size && b < self.size);
        if self.m == 1 {
            return (a + b) % self.p;
        }

        let (mut a, mut b) = (a, b);
        let mut sum = 0;
        let mut place = 1;
        while a > 0 || b > 0 {
            sum += ((a % self.p + b % self.p) % self.p) * place;
            a /= self.p;
            b /= self.p;
            place *= self.p;
        }
        sum
    }

    /// Field multiplication.
    #[must_use]
    pub fn mul(&self, a: usize, b: usize) -> usize {
        debug_assert!(a < self.size && b < self.size);
        if self.m == 1 {
            return (a * b) % self.p;
        }
        if a == 0 || b == 0 {
            return 0;
        }

        let m = self.m as usize;
        let lhs = self.digits(a);
        let rhs = self.digits(b);

        let mut product: Poly = SmallVec::from_elem(0, 2 * m - 1);
        for (i, &x) in lhs.iter().enumerate() {
            if x == 0 {
                continue;
            }
            for (j, &y) in rhs.iter().enumerate() {
                product[i + j] = (product[i + j] + x * y) % self.p;
            }
        }

        reduce(&mut product, &self.modulus, self.p);
        self.encode(&product[..m])
    }

    fn digits(&self, mut value: usize) -> Poly {
        let mut digits = Poly::new();
        for _ in 0..self.m {
            digits.push(value % self.p);
            value /= self.p;
        }
        digits
    }

    fn encode(&self, coefficients: &[usize]) -> usize {
        coefficients.iter().rev().fold(0, |acc, &c| acc * self.p + c)
    }
}

/// Reduce `poly` in place modulo the monic `modulus`.
///
/// Afterwards every coefficient at or above the modulus degree is zero.
fn reduce(poly: &mut [usize], modulus: &[usize], p: usize) {
    let degree = modulus.len() - 1;
    for top in (degree..poly.len()).rev() {
        let lead = poly[top];
        if lead == 0 {
            continue;
        }
        let shift = top - degree;
        for (i, &c) in modulus.iter().enumerate() {
            let sub = (lead * c) % p;
            poly[shift + i] = (poly[shift + i] + p - sub) % p;
        }
    }
}

/// Monic polynomial of `degree` whose lower coefficients are the base-`p`
/// digits of `index`.
fn monic(index: usize, degree: usize, p: usize) -> Poly {
    let mut poly = Poly::with_capacity(degree + 1);
    let mut rest = index;
    for _ in 0..degree {
        poly.push(rest % p);
        rest /= p;
    }
    poly.push(1);
    poly
}

fn divides(divisor: &[usize], poly: &[usize], p: usize) -> bool {
    let mut rem: Poly = poly.iter().copied().collect();
    reduce(&mut rem, divisor, p);
    rem.iter().all(|&c| c == 0)
}

fn is_irreducible(poly: &[usize], p: usize) -> bool {
    let degree = poly.len() - 1;
    (1..=degree / 2).all(|d| (0..p.pow(d as u32)).all(|i| !divides(&monic(i, d, p), poly, p)))
}

fn find_irreducible(p: usize, m: usize) -> Poly {
    let candidates = p.pow(m as u32);
    for index in 0..candidates {
        let poly = monic(index, m, p);
        if is_irreducible(&poly, p) {
            return poly;
        }
    }
    // Irreducible polynomials exist in every degree over every prime field.
    unreachable!("no irreducible polynomial of degree {m} over GF({p})")
}
