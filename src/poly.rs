//! Ring elements of Z_m[x]/(x^N - 1).
//!
//! A `Poly` owns its N coefficients and the modulus they are reduced by.
//! Coefficients are always canonical residues in [0, m); balanced
//! representatives only appear as the `Vec<i64>` returned by `center_lift`.

use zeroize::Zeroize;

use crate::arith::{addmod, center, reduce_signed, submod};

#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Poly {
    coeffs: Vec<u32>,
    modulus: u32,
}

impl Poly {
    pub fn zero(n: usize, modulus: u32) -> Self {
        Poly {
            coeffs: vec![0u32; n],
            modulus,
        }
    }

    /// The unit polynomial 1.
    pub fn one(n: usize, modulus: u32) -> Self {
        Self::constant(1, n, modulus)
    }

    pub fn constant(c: u32, n: usize, modulus: u32) -> Self {
        let mut p = Self::zero(n, modulus);
        p.coeffs[0] = c % modulus;
        p
    }

    /// Wrap coefficients, reducing each one into [0, modulus).
    pub fn from_coeffs(mut coeffs: Vec<u32>, modulus: u32) -> Self {
        for c in coeffs.iter_mut() {
            *c %= modulus;
        }
        Poly { coeffs, modulus }
    }

    /// Create a polynomial from signed integer coefficients.
    pub fn from_signed(coeffs: &[i64], modulus: u32) -> Self {
        Poly {
            coeffs: coeffs.iter().map(|&c| reduce_signed(c, modulus)).collect(),
            modulus,
        }
    }

    pub fn coeffs(&self) -> &[u32] {
        &self.coeffs
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Ring degree N.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.coeffs.first() == Some(&1) && self.coeffs[1..].iter().all(|&c| c == 0)
    }

    fn assert_compatible(&self, other: &Poly) {
        assert_eq!(self.len(), other.len(), "ring degree mismatch");
        assert_eq!(self.modulus, other.modulus, "modulus mismatch");
    }

    /// Coefficient-wise addition.
    pub fn add(&self, other: &Poly) -> Poly {
        self.assert_compatible(other);
        let m = self.modulus;
        Poly {
            coeffs: self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .map(|(&a, &b)| addmod(a, b, m))
                .collect(),
            modulus: m,
        }
    }

    /// Coefficient-wise subtraction.
    pub fn sub(&self, other: &Poly) -> Poly {
        self.assert_compatible(other);
        let m = self.modulus;
        Poly {
            coeffs: self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .map(|(&a, &b)| submod(a, b, m))
                .collect(),
            modulus: m,
        }
    }

    /// Multiply every coefficient by `k`.
    pub fn scale(&self, k: u32) -> Poly {
        let m = self.modulus as u64;
        let k = k as u64 % m;
        Poly {
            coeffs: self.coeffs.iter().map(|&c| (c as u64 * k % m) as u32).collect(),
            modulus: self.modulus,
        }
    }

    /// Cyclic convolution: `result[(i + j) mod N] += a[i] * b[j]`.
    ///
    /// Products are accumulated in u64 and reduced once per output
    /// coefficient; N * m^2 stays far below 2^64 for 16-bit moduli.
    pub fn mul(&self, other: &Poly) -> Poly {
        self.assert_compatible(other);
        let m = self.modulus as u64;
        let coeffs = convolve(&self.coeffs, &other.coeffs)
            .into_iter()
            .map(|acc| (acc % m) as u32)
            .collect();
        Poly {
            coeffs,
            modulus: self.modulus,
        }
    }

    /// Balanced representatives in (-m/2, m/2].
    pub fn center_lift(&self) -> Vec<i64> {
        self.coeffs.iter().map(|&c| center(c, self.modulus)).collect()
    }

    /// Re-express the polynomial modulo `modulus` through its balanced
    /// representatives, so -1 stored as q - 1 becomes p - 1.
    pub fn reduce(&self, modulus: u32) -> Poly {
        Poly::from_signed(&self.center_lift(), modulus)
    }

    /// Exactly `ones` coefficients equal 1 and `neg_ones` equal m - 1.
    pub fn has_ternary_weight(&self, ones: usize, neg_ones: usize) -> bool {
        let mut plus = 0usize;
        let mut minus = 0usize;
        for &c in &self.coeffs {
            match c {
                0 => {}
                1 => plus += 1,
                c if c == self.modulus - 1 => minus += 1,
                _ => return false,
            }
        }
        plus == ones && minus == neg_ones
    }

    /// Ternary with `d` ones and either `d` or `d - 1` minus-ones.
    pub fn is_ternary(&self, d: usize) -> bool {
        self.has_ternary_weight(d, d) || (d > 0 && self.has_ternary_weight(d, d - 1))
    }
}

#[cfg(not(feature = "parallel"))]
fn convolve(a: &[u32], b: &[u32]) -> Vec<u64> {
    let n = a.len();
    let mut acc = vec![0u64; n];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            let k = if i + j >= n { i + j - n } else { i + j };
            acc[k] += ai as u64 * bj as u64;
        }
    }
    acc
}

// Each output index is an independent accumulation.
#[cfg(feature = "parallel")]
fn convolve(a: &[u32], b: &[u32]) -> Vec<u64> {
    use rayon::prelude::*;

    let n = a.len();
    (0..n)
        .into_par_iter()
        .map(|k| {
            a.iter()
                .enumerate()
                .filter(|&(_, &ai)| ai != 0)
                .map(|(i, &ai)| ai as u64 * b[(k + n - i) % n] as u64)
                .sum::<u64>()
        })
        .collect()
}
