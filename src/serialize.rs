//! Serialization: ring element ↔ bytes.
//!
//! Format: N coefficients, each a little-endian u16 (2 bytes), so any
//! modulus up to 2^16 round-trips. Total: 2N bytes per polynomial.

use crate::error::{InvalidInput, Result};
use crate::params::COEFF_BYTES;
use crate::poly::Poly;

/// Serialize a polynomial to bytes (little-endian u16 per coefficient).
pub fn serialize_poly(poly: &Poly) -> Vec<u8> {
    let mut buf = Vec::with_capacity(poly.len() * COEFF_BYTES);
    for &c in poly.coeffs() {
        buf.extend_from_slice(&(c as u16).to_le_bytes());
    }
    buf
}

/// Deserialize an N-coefficient polynomial under `modulus`.
///
/// Fails if `data` is not exactly `2 * n` bytes or a coefficient is not a
/// canonical residue.
pub fn deserialize_poly(data: &[u8], n: usize, modulus: u32, what: &'static str) -> Result<Poly> {
    let expected = n * COEFF_BYTES;
    if data.len() != expected {
        return Err(InvalidInput::WrongLength {
            what,
            expected,
            actual: data.len(),
        }
        .into());
    }
    let mut coeffs = Vec::with_capacity(n);
    for (index, chunk) in data.chunks_exact(COEFF_BYTES).enumerate() {
        let value = u16::from_le_bytes([chunk[0], chunk[1]]) as u32;
        if value >= modulus {
            return Err(InvalidInput::CoefficientOutOfRange {
                what,
                index,
                value,
                modulus,
            }
            .into());
        }
        coeffs.push(value);
    }
    Ok(Poly::from_coeffs(coeffs, modulus))
}
