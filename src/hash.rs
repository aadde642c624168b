//! Hash collaborator used by the KEM to derive shared secrets.

use sha3::{Digest, Sha3_256};

use crate::params::SHARED_SECRET_BYTES;

/// Collision-resistant digest from a message to a shared secret.
pub trait SecretHash {
    fn hash(&self, message: &[u8]) -> [u8; SHARED_SECRET_BYTES];
}

/// SHA3-256, the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3Hash;

impl SecretHash for Sha3Hash {
    #[inline]
    fn hash(&self, message: &[u8]) -> [u8; SHARED_SECRET_BYTES] {
        hash_h(message)
    }
}

/// H(input) = SHA3-256(input) -> 32 bytes.
#[inline]
pub fn hash_h(input: impl AsRef<[u8]>) -> [u8; 32] {
    Sha3_256::digest(input).into()
}
