//! Ternary and message sampling.
//!
//! ⚠️ NOT CONSTANT-TIME.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::params::MAX_MESSAGE_MODULUS;
use crate::poly::Poly;

/// Sample a polynomial with exactly `ones` coefficients equal to 1 and
/// `neg_ones` equal to -1 (stored as `modulus - 1`), at uniformly random
/// positions.
pub fn sample_ternary<R: Rng>(
    rng: &mut R,
    n: usize,
    ones: usize,
    neg_ones: usize,
    modulus: u32,
) -> Poly {
    assert!(ones + neg_ones <= n, "ones + neg_ones must be <= N");

    let mut coeffs = vec![0u32; n];
    coeffs[..ones].fill(1);
    coeffs[ones..ones + neg_ones].fill(modulus - 1);
    coeffs.shuffle(rng);

    Poly::from_coeffs(coeffs, modulus)
}

/// Sample `len` bytes uniformly in [0, p).
pub fn sample_residues<R: Rng>(rng: &mut R, len: usize, p: u32) -> Vec<u8> {
    assert!(p <= MAX_MESSAGE_MODULUS, "p must fit in one byte");
    (0..len).map(|_| rng.gen_range(0..p) as u8).collect()
}
