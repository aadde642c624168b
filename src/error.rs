//! Error model shared by every fallible operation in the crate.

use thiserror::Error;

/// Rejected input, detected before any ring arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("message of {len} bytes exceeds ring degree {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("{what}: expected {expected} bytes, got {actual}")]
    WrongLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what}: coefficient {index} is {value}, not below modulus {modulus}")]
    CoefficientOutOfRange {
        what: &'static str,
        index: usize,
        value: u32,
        modulus: u32,
    },

    #[error("{what} is malformed: {reason}")]
    MalformedKey {
        what: &'static str,
        reason: &'static str,
    },

    #[error("{what} does not match the parameter set in use")]
    ParameterMismatch { what: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No private polynomial invertible modulo both p and q was found.
    #[error("key generation failed: no invertible private polynomial after {attempts} attempts")]
    KeyGenerationFailure { attempts: usize },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),

    /// Decryption finished but the recovered value differs from the expected one.
    #[error("decryption mismatch: recovered value differs from the expected one")]
    DecryptionMismatch,
}

pub type Result<T> = std::result::Result<T, Error>;
