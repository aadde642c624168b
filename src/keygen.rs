//! Key generation.

use rand::{CryptoRng, Rng};
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, InvalidInput, Result};
use crate::inverse::{invert_mod_pow2, invert_mod_prime};
use crate::params::{NtruParams, MAX_KEYGEN_ATTEMPTS};
use crate::poly::Poly;
use crate::sampling::sample_ternary;
use crate::serialize::{deserialize_poly, serialize_poly};

/// Private key: the ternary polynomial f (mod q) and its inverse fp (mod p).
///
/// Zeroized on drop to prevent secret material from lingering in memory.
/// Does not implement `Debug` to prevent accidental logging of secrets.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    pub(crate) f: Poly,
    pub(crate) fp: Poly,
    #[zeroize(skip)]
    pub(crate) params: NtruParams,
}

impl PrivateKey {
    pub fn f(&self) -> &Poly {
        &self.f
    }

    pub fn fp(&self) -> &Poly {
        &self.fp
    }

    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    /// Serialize as f || fp, two bytes per coefficient.
    ///
    /// The returned buffer is zeroized on drop.
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut buf = Zeroizing::new(Vec::with_capacity(self.params.private_key_bytes()));
        buf.extend_from_slice(&Zeroizing::new(serialize_poly(&self.f)));
        buf.extend_from_slice(&Zeroizing::new(serialize_poly(&self.fp)));
        buf
    }

    /// Deserialize from bytes produced by `to_bytes`.
    ///
    /// The stored f must be ternary with the expected weight and fp must be
    /// its inverse modulo p.
    pub fn from_bytes(data: &[u8], params: &NtruParams) -> Result<Self> {
        params.validate()?;
        let expected = params.private_key_bytes();
        if data.len() != expected {
            return Err(InvalidInput::WrongLength {
                what: "private key",
                expected,
                actual: data.len(),
            }
            .into());
        }
        let (f_bytes, fp_bytes) = data.split_at(params.poly_bytes());
        let f = deserialize_poly(f_bytes, params.n, params.q, "private key")?;
        let fp = deserialize_poly(fp_bytes, params.n, params.p, "private key")?;

        let key = PrivateKey {
            f,
            fp,
            params: *params,
        };
        if !key.f.has_ternary_weight(params.df, params.df - 1) {
            return Err(InvalidInput::MalformedKey {
                what: "private key",
                reason: "f does not have the expected ternary weight",
            }
            .into());
        }
        if !key.f.reduce(params.p).mul(&key.fp).is_one() {
            return Err(InvalidInput::MalformedKey {
                what: "private key",
                reason: "fp is not the inverse of f modulo p",
            }
            .into());
        }
        Ok(key)
    }
}

/// Public key h = fq * g (mod q).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) h: Poly,
    pub(crate) params: NtruParams,
}

impl PublicKey {
    pub fn h(&self) -> &Poly {
        &self.h
    }

    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    /// Serialize to bytes (little-endian u16 per coefficient, 2N bytes).
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize_poly(&self.h)
    }

    /// Deserialize from bytes.
    ///
    /// Fails if `data` is not exactly `2N` bytes or holds a coefficient ≥ q.
    pub fn from_bytes(data: &[u8], params: &NtruParams) -> Result<Self> {
        params.validate()?;
        let h = deserialize_poly(data, params.n, params.q, "public key")?;
        Ok(PublicKey { h, params: *params })
    }
}

/// A private key and the public key derived from it.
#[derive(Clone)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

/// Generate a keypair, resampling f at most `MAX_KEYGEN_ATTEMPTS` times.
pub fn keygen<R: Rng + CryptoRng>(rng: &mut R, params: &NtruParams) -> Result<KeyPair> {
    keygen_with_attempts(rng, params, MAX_KEYGEN_ATTEMPTS)
}

/// Generate a keypair with an explicit resample bound.
pub fn keygen_with_attempts<R: Rng + CryptoRng>(
    rng: &mut R,
    params: &NtruParams,
    max_attempts: usize,
) -> Result<KeyPair> {
    params.validate()?;
    let NtruParams { n, p, q, df, dg, .. } = *params;

    for attempt in 1..=max_attempts {
        // df ones, df - 1 minus-ones: f(1) = 1, so x - 1 never divides f.
        let f = sample_ternary(rng, n, df, df - 1, q);

        let Some(fp) = invert_mod_prime(&f.reduce(p)) else {
            debug!(attempt, modulus = p, "f not invertible, resampling");
            continue;
        };
        let Some(mut fq) = invert_mod_pow2(&f) else {
            debug!(attempt, modulus = q, "f not invertible, resampling");
            continue;
        };

        let mut g = sample_ternary(rng, n, dg, dg, q);
        let h = fq.mul(&g);
        fq.zeroize();
        g.zeroize();

        debug!(attempts = attempt, %params, "generated key pair");
        return Ok(KeyPair {
            public: PublicKey { h, params: *params },
            private: PrivateKey {
                f,
                fp,
                params: *params,
            },
        });
    }

    warn!(max_attempts, %params, "key generation exhausted its attempt bound");
    Err(Error::KeyGenerationFailure {
        attempts: max_attempts,
    })
}
