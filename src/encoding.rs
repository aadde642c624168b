//! Plaintext encoding: bytes ↔ polynomial coefficients mod p.
//!
//! One byte per coefficient, folded into [0, p). Bytes that are already
//! residues (< p) survive a round trip unchanged; larger bytes are lossy.

use crate::error::{InvalidInput, Result};
use crate::poly::Poly;

/// Encode up to `n` bytes into a polynomial mod `p`, zero padded.
pub fn encode(message: &[u8], n: usize, p: u32) -> Result<Poly> {
    if message.len() > n {
        return Err(InvalidInput::MessageTooLong {
            len: message.len(),
            max: n,
        }
        .into());
    }
    let mut coeffs = vec![0u32; n];
    for (c, &byte) in coeffs.iter_mut().zip(message) {
        *c = byte as u32 % p;
    }
    Ok(Poly::from_coeffs(coeffs, p))
}

/// Decode the first `len` centered coefficients back into bytes, mapping
/// each one to its canonical residue in [0, p).
pub fn decode(centered: &[i64], len: usize, p: u32) -> Vec<u8> {
    centered
        .iter()
        .take(len)
        .map(|&c| c.rem_euclid(p as i64) as u8)
        .collect()
}
