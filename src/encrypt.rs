//! Encryption: e = p * r * h + m (mod q).

use rand::{CryptoRng, Rng};
use tracing::trace;
use zeroize::Zeroize;

use crate::encoding::encode;
use crate::error::{InvalidInput, Result};
use crate::keygen::PublicKey;
use crate::params::NtruParams;
use crate::poly::Poly;
use crate::sampling::sample_ternary;
use crate::serialize::{deserialize_poly, serialize_poly};

/// A ciphertext: one ring element modulo q.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) e: Poly,
}

impl Ciphertext {
    pub fn poly(&self) -> &Poly {
        &self.e
    }

    /// Serialize to bytes (little-endian u16 per coefficient, 2N bytes).
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize_poly(&self.e)
    }

    /// Deserialize from bytes.
    ///
    /// Fails if `data` is not exactly `2N` bytes or holds a coefficient ≥ q.
    pub fn from_bytes(data: &[u8], params: &NtruParams) -> Result<Self> {
        let e = deserialize_poly(data, params.n, params.q, "ciphertext")?;
        Ok(Ciphertext { e })
    }
}

/// Encrypt a message of at most N bytes under `pk`.
pub fn encrypt<R: Rng + CryptoRng>(rng: &mut R, pk: &PublicKey, message: &[u8]) -> Result<Ciphertext> {
    let params = pk.params;
    check_public_key(pk)?;
    let m = encode(message, params.n, params.p)?;

    let mut r = sample_ternary(rng, params.n, params.dr, params.dr, params.q);
    let ct = blind(pk, &m, &r);
    r.zeroize();

    trace!(len = message.len(), "encrypted message");
    Ok(ct)
}

/// e = p * (r * h) + m, with m lifted into Z_q through its balanced
/// representatives.
pub(crate) fn blind(pk: &PublicKey, m: &Poly, r: &Poly) -> Ciphertext {
    let params = pk.params;
    let e = r.mul(&pk.h).scale(params.p).add(&m.reduce(params.q));
    Ciphertext { e }
}

fn check_public_key(pk: &PublicKey) -> Result<()> {
    if pk.h.len() != pk.params.n || pk.h.modulus() != pk.params.q {
        return Err(InvalidInput::ParameterMismatch { what: "public key" }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::keygen::keygen;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ciphertext_is_mod_q_and_fresh() {
        let params = NtruParams::NTRU_107;
        let mut rng = StdRng::seed_from_u64(5);
        let kp = keygen(&mut rng, &params).unwrap();
        let c1 = encrypt(&mut rng, &kp.public, b"\x01\x02\x00").unwrap();
        let c2 = encrypt(&mut rng, &kp.public, b"\x01\x02\x00").unwrap();
        assert_eq!(c1.poly().modulus(), params.q);
        assert_eq!(c1.poly().len(), params.n);
        assert_ne!(c1, c2);
    }

    #[test]
    fn blinding_is_linear_in_the_message() {
        // With the same r, the two ciphertexts differ by exactly the
        // lifted message difference.
        let params = NtruParams::NTRU_107;
        let mut rng = StdRng::seed_from_u64(6);
        let kp = keygen(&mut rng, &params).unwrap();
        let r = sample_ternary(&mut rng, params.n, params.dr, params.dr, params.q);
        let m0 = encode(&[], params.n, params.p).unwrap();
        let m1 = encode(&[1, 2], params.n, params.p).unwrap();
        let diff = blind(&kp.public, &m1, &r).e.sub(&blind(&kp.public, &m0, &r).e);
        assert_eq!(diff.center_lift()[..3], [1, -1, 0]);
    }

    #[test]
    fn ephemeral_r_is_ternary_with_dr_weight() {
        // Replaying the rng reproduces the r that `encrypt` draws.
        let params = NtruParams::NTRU_107;
        let mut rng = StdRng::seed_from_u64(7);
        let kp = keygen(&mut rng, &params).unwrap();
        let message = [2u8, 1, 0, 1];

        let mut replay = rng.clone();
        let ct = encrypt(&mut rng, &kp.public, &message).unwrap();

        let r = sample_ternary(&mut replay, params.n, params.dr, params.dr, params.q);
        assert!(r.has_ternary_weight(params.dr, params.dr));
        let m = encode(&message, params.n, params.p).unwrap();
        assert_eq!(blind(&kp.public, &m, &r), ct);
    }

    #[test]
    fn rejects_long_message() {
        let params = NtruParams::TOY;
        let mut rng = StdRng::seed_from_u64(8);
        let kp = keygen(&mut rng, &params).unwrap();
        let err = encrypt(&mut rng, &kp.public, &[0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput(InvalidInput::MessageTooLong { len: 12, max: 11 })
        );
    }

    #[test]
    fn ciphertext_bytes_roundtrip() {
        let params = NtruParams::TOY;
        let mut rng = StdRng::seed_from_u64(9);
        let kp = keygen(&mut rng, &params).unwrap();
        let ct = encrypt(&mut rng, &kp.public, &[1, 0, 2]).unwrap();
        let bytes = ct.to_bytes();
        assert_eq!(bytes.len(), params.ciphertext_bytes());
        assert_eq!(Ciphertext::from_bytes(&bytes, &params).unwrap(), ct);
        assert!(Ciphertext::from_bytes(&bytes[1..], &params).is_err());
    }
}
