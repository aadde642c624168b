//! Decryption by two-stage reduction.
//!
//! a = f * e = p * r * g + f * m (mod q). When every coefficient of the
//! right-hand side lies in (-q/2, q/2], center-lifting a recovers it over the
//! integers; reducing mod p then kills the blinding term and fp * a = m.
//! Otherwise the recovered bytes are wrong, which is the scheme's intrinsic
//! decryption failure.

use tracing::debug;

use crate::encoding::decode;
use crate::encrypt::Ciphertext;
use crate::error::{Error, InvalidInput, Result};
use crate::keygen::PrivateKey;
use crate::poly::Poly;

/// Decrypt `ct`, returning the first `len` message bytes.
///
/// Always returns the best-effort recovery; use `decrypt_expecting` to
/// check it against a known plaintext.
pub fn decrypt(sk: &PrivateKey, ct: &Ciphertext, len: usize) -> Result<Vec<u8>> {
    let params = sk.params;
    if len > params.n {
        return Err(InvalidInput::MessageTooLong {
            len,
            max: params.n,
        }
        .into());
    }
    if ct.e.len() != params.n || ct.e.modulus() != params.q {
        return Err(InvalidInput::ParameterMismatch { what: "ciphertext" }.into());
    }

    let a = sk.f.mul(&ct.e);
    let a = Poly::from_signed(&a.center_lift(), params.p);
    let m = sk.fp.mul(&a);

    Ok(decode(&m.center_lift(), len, params.p))
}

/// Decrypt and compare with `expected`.
///
/// A mismatch is reported as `Error::DecryptionMismatch`; it is not a bug
/// but the scheme's nonzero failure probability (or a tampered ciphertext).
pub fn decrypt_expecting(sk: &PrivateKey, ct: &Ciphertext, expected: &[u8]) -> Result<Vec<u8>> {
    let recovered = decrypt(sk, ct, expected.len())?;
    if recovered != expected {
        debug!(len = expected.len(), "decryption mismatch");
        return Err(Error::DecryptionMismatch);
    }
    Ok(recovered)
}
