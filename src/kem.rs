//! Key encapsulation over the public-key scheme.
//!
//! Encapsulation encrypts a random message and hashes it into the shared
//! secret; decapsulation decrypts and hashes the recovered message. The two
//! secrets agree exactly when decryption succeeds. There is no re-encryption
//! check, so a tampered ciphertext silently yields an unrelated secret.

use rand::{CryptoRng, Rng};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::decrypt::decrypt;
use crate::encrypt::{encrypt, Ciphertext};
use crate::error::{Error, Result};
use crate::hash::{SecretHash, Sha3Hash};
use crate::keygen::{PrivateKey, PublicKey};
use crate::params::{KEM_MESSAGE_BYTES, SHARED_SECRET_BYTES};
use crate::sampling::sample_residues;

/// Shared secret (always 32 bytes). Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: [u8; SHARED_SECRET_BYTES],
}

impl SharedSecret {
    #[inline]
    pub fn from_bytes(bytes: [u8; SHARED_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for SharedSecret {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

/// Output of `encapsulate`.
#[derive(Debug)]
pub struct Encapsulation {
    pub ciphertext: Ciphertext,
    pub shared_secret: SharedSecret,
}

/// Encapsulate with the default SHA3-256 hash.
pub fn encapsulate<R: Rng + CryptoRng>(rng: &mut R, pk: &PublicKey) -> Result<Encapsulation> {
    encapsulate_with(&Sha3Hash, rng, pk)
}

/// Encapsulate with a caller-supplied hash.
///
/// The message bytes are drawn uniformly from [0, p) so that they survive
/// the mod-p plaintext encoding unchanged.
pub fn encapsulate_with<H: SecretHash, R: Rng + CryptoRng>(
    hasher: &H,
    rng: &mut R,
    pk: &PublicKey,
) -> Result<Encapsulation> {
    let message = Zeroizing::new(sample_residues(rng, KEM_MESSAGE_BYTES, pk.params.p));
    let ciphertext = encrypt(rng, pk, &message)?;
    let shared_secret = SharedSecret::from_bytes(hasher.hash(&message));
    Ok(Encapsulation {
        ciphertext,
        shared_secret,
    })
}

/// Decapsulate with the default SHA3-256 hash.
pub fn decapsulate(sk: &PrivateKey, ct: &Ciphertext) -> Result<SharedSecret> {
    decapsulate_with(&Sha3Hash, sk, ct)
}

/// Decapsulate with a caller-supplied hash.
pub fn decapsulate_with<H: SecretHash>(
    hasher: &H,
    sk: &PrivateKey,
    ct: &Ciphertext,
) -> Result<SharedSecret> {
    let message = Zeroizing::new(decrypt(sk, ct, KEM_MESSAGE_BYTES)?);
    Ok(SharedSecret::from_bytes(hasher.hash(&message)))
}

/// Compare two shared secrets, reporting disagreement as
/// `Error::DecryptionMismatch`.
pub fn confirm(expected: &SharedSecret, recovered: &SharedSecret) -> Result<()> {
    if expected.bytes != recovered.bytes {
        debug!("shared secrets disagree");
        return Err(Error::DecryptionMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;
    use crate::keygen::keygen;
    use crate::params::NtruParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Hashes by truncating/padding the message; makes the secret visible.
    struct Identity;

    impl SecretHash for Identity {
        fn hash(&self, message: &[u8]) -> [u8; SHARED_SECRET_BYTES] {
            let mut out = [0u8; SHARED_SECRET_BYTES];
            let len = message.len().min(SHARED_SECRET_BYTES);
            out[..len].copy_from_slice(&message[..len]);
            out
        }
    }

    #[test]
    fn kem_roundtrip() {
        let mut rng = StdRng::seed_from_u64(31);
        let kp = keygen(&mut rng, &NtruParams::NTRU_107).unwrap();
        let enc = encapsulate(&mut rng, &kp.public).unwrap();
        let ss = decapsulate(&kp.private, &enc.ciphertext).unwrap();
        assert_eq!(enc.shared_secret.as_bytes(), ss.as_bytes());
        assert!(confirm(&enc.shared_secret, &ss).is_ok());
    }

    #[test]
    fn kem_message_is_residues() {
        let mut rng = StdRng::seed_from_u64(32);
        let kp = keygen(&mut rng, &NtruParams::NTRU_107).unwrap();
        let enc = encapsulate_with(&Identity, &mut rng, &kp.public).unwrap();
        assert!(enc.shared_secret.as_bytes().iter().all(|&b| b < 3));
        let ss = decapsulate_with(&Identity, &kp.private, &enc.ciphertext).unwrap();
        assert_eq!(enc.shared_secret.as_bytes(), ss.as_bytes());
    }

    #[test]
    fn confirm_reports_mismatch() {
        let a = SharedSecret::from_bytes([1u8; SHARED_SECRET_BYTES]);
        let b = SharedSecret::from_bytes([2u8; SHARED_SECRET_BYTES]);
        assert_eq!(confirm(&a, &b), Err(Error::DecryptionMismatch));
    }

    #[test]
    fn toy_ring_cannot_carry_kem_message() {
        let mut rng = StdRng::seed_from_u64(33);
        let kp = keygen(&mut rng, &NtruParams::TOY).unwrap();
        let err = encapsulate(&mut rng, &kp.public).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput(InvalidInput::MessageTooLong { len: 32, max: 11 })
        );
    }

    #[test]
    fn debug_is_redacted() {
        let ss = SharedSecret::from_bytes([7u8; SHARED_SECRET_BYTES]);
        assert_eq!(format!("{ss:?}"), "SharedSecret([REDACTED])");
    }
}
