//! Scheme parameters and named parameter sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arith::is_prime;
use crate::error::{Error, Result};

/// Bytes per serialized coefficient (little-endian u16).
pub const COEFF_BYTES: usize = 2;

/// Largest modulus whose residues fit in `COEFF_BYTES`.
pub const MAX_MODULUS: u32 = 1 << 16;

/// Resample bound for the private polynomial during key generation.
pub const MAX_KEYGEN_ATTEMPTS: usize = 100;

/// Largest small modulus whose residues fit in one message byte.
pub const MAX_MESSAGE_MODULUS: u32 = 1 << 8;

/// Length of the random message drawn by `encapsulate`.
pub const KEM_MESSAGE_BYTES: usize = 32;

/// Length of a shared secret (SHA3-256 output).
pub const SHARED_SECRET_BYTES: usize = 32;

/// Ring and sampling parameters.
///
/// `f` carries `df` ones and `df - 1` minus-ones, `g` carries `dg` of each and
/// the ephemeral `r` carries `dr` of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtruParams {
    /// Ring degree N.
    pub n: usize,
    /// Small modulus (prime, typically 3).
    pub p: u32,
    /// Large modulus (power of two).
    pub q: u32,
    pub df: usize,
    pub dg: usize,
    pub dr: usize,
}

impl NtruParams {
    /// Toy parameters. Far too small for security and for the KEM message,
    /// with a decryption failure rate around 2%.
    pub const TOY: NtruParams = NtruParams {
        n: 11,
        p: 3,
        q: 32,
        df: 3,
        dg: 3,
        dr: 3,
    };

    /// Small parameters with a negligible decryption failure rate.
    pub const NTRU_107: NtruParams = NtruParams {
        n: 107,
        p: 3,
        q: 128,
        df: 15,
        dg: 12,
        dr: 5,
    };

    pub const NTRU_503: NtruParams = NtruParams {
        n: 503,
        p: 3,
        q: 256,
        df: 216,
        dg: 72,
        dr: 55,
    };

    pub const NTRU_677: NtruParams = NtruParams {
        n: 677,
        p: 3,
        q: 2048,
        df: 254,
        dg: 113,
        dr: 82,
    };

    /// Check that the parameters describe a usable scheme.
    pub fn validate(&self) -> Result<()> {
        if self.n < 2 {
            return Err(Error::InvalidParameters("N must be at least 2"));
        }
        if !is_prime(self.p) {
            return Err(Error::InvalidParameters("p must be prime"));
        }
        if !self.q.is_power_of_two() {
            return Err(Error::InvalidParameters("q must be a power of two"));
        }
        if self.q > MAX_MODULUS {
            return Err(Error::InvalidParameters("q must fit in 16 bits"));
        }
        if self.p > MAX_MESSAGE_MODULUS {
            return Err(Error::InvalidParameters("p must fit in one message byte"));
        }
        if self.q <= self.p {
            return Err(Error::InvalidParameters("q must be greater than p"));
        }
        // p prime and q a power of two: coprime unless p = 2.
        if self.p == 2 {
            return Err(Error::InvalidParameters("p and q must be coprime"));
        }
        if self.n.checked_mul(2 * COEFF_BYTES).is_none() {
            return Err(Error::InvalidParameters("N is too large to serialize"));
        }
        // 2 * df - 1 <= N, written so that no weight can overflow.
        if self.df == 0 || self.df > self.n.div_ceil(2) {
            return Err(Error::InvalidParameters("df does not fit the ring degree"));
        }
        if self.dg > self.n / 2 {
            return Err(Error::InvalidParameters("dg does not fit the ring degree"));
        }
        if self.dr > self.n / 2 {
            return Err(Error::InvalidParameters("dr does not fit the ring degree"));
        }
        Ok(())
    }

    /// Serialized size of one ring element.
    pub fn poly_bytes(&self) -> usize {
        self.n * COEFF_BYTES
    }

    pub fn public_key_bytes(&self) -> usize {
        self.poly_bytes()
    }

    pub fn ciphertext_bytes(&self) -> usize {
        self.poly_bytes()
    }

    /// `f` and `fp`, back to back.
    pub fn private_key_bytes(&self) -> usize {
        2 * self.poly_bytes()
    }
}

impl Default for NtruParams {
    fn default() -> Self {
        Self::NTRU_503
    }
}

impl fmt::Display for NtruParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NTRU-{} (N={}, p={}, q={})", self.n, self.n, self.p, self.q)
    }
}
