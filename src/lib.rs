//! NTRU-style public-key encryption over Z[x]/(x^N - 1) with a KEM wrapper.
//!
//! # ⚠️ WARNING: NOT PRODUCTION READY ⚠️
//!
//! This is a research prototype. NOT audited, NOT constant-time,
//! NOT safe against side-channel attacks. The parameter sets are not
//! certified for any security level.
//!
//! ```
//! use ntru_kem::{decapsulate, encapsulate, keygen, NtruParams};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let kp = keygen(&mut rng, &NtruParams::NTRU_107).unwrap();
//! let enc = encapsulate(&mut rng, &kp.public).unwrap();
//! let ss = decapsulate(&kp.private, &enc.ciphertext).unwrap();
//! assert_eq!(ss.as_bytes(), enc.shared_secret.as_bytes());
//! ```

pub mod arith;
pub mod decrypt;
pub mod encoding;
pub mod encrypt;
pub mod error;
pub mod hash;
pub mod inverse;
pub mod kem;
pub mod keygen;
pub mod params;
pub mod poly;
pub mod sampling;
pub mod serialize;

pub use decrypt::{decrypt, decrypt_expecting};
pub use encrypt::{encrypt, Ciphertext};
pub use error::{Error, InvalidInput, Result};
pub use hash::{SecretHash, Sha3Hash};
pub use kem::{
    confirm, decapsulate, decapsulate_with, encapsulate, encapsulate_with, Encapsulation,
    SharedSecret,
};
pub use keygen::{keygen, keygen_with_attempts, KeyPair, PrivateKey, PublicKey};
pub use params::NtruParams;
pub use poly::Poly;
