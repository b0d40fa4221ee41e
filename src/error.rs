//! Errors returned by key generation, signing and modular arithmetic.

use thiserror::Error;

/// Errors that can occur while generating keys, signing or computing inverses.
///
/// Verification never fails with an error: a signature either verifies or it
/// does not.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The group parameters failed a sanity check, e.g. `q <= 2`.
    #[error("invalid group parameters: {0}")]
    InvalidParameters(&'static str),

    /// The number has no multiplicative inverse for the given modulus.
    #[error("no modular inverse exists")]
    InverseNotFound,

    /// A caller supplied nonce is outside `[1, q-2]` or shares a factor with `q-1`.
    #[error("nonce must be in [1, q-2] and coprime with q-1")]
    InvalidNonce,

    /// Rejection sampling did not find a nonce coprime with `q-1`.
    #[error("no valid nonce found after {0} attempts")]
    NonceExhausted(usize),

    /// The private exponent is outside `[1, q-1]`.
    #[error("private key must be in [1, q-1]")]
    InvalidPrivateKey,
}

pub type Result<T> = core::result::Result<T, SignatureError>;
