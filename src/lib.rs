//! This library provides ElGamal digital signatures over the multiplicative
//! group of integers modulo a prime `q`.
//!
//! Randomness is always injected by the caller: every `rand` generator can
//! be passed where a [`RandomSource`] is expected.
//!
//! ```
//! use elgamal_signature::{ElGamal, GroupParameters, Helper};
//! use num_bigint::BigUint;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let params = GroupParameters::new(BigUint::from(10007u32), BigUint::from(5u32)).unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let keys = Helper::generate_key_pair(&params, &mut rng).unwrap();
//! let signature = ElGamal::sign(b"hello", &keys.private, &mut rng).unwrap();
//! assert!(ElGamal::verify(b"hello", &signature, &keys.public));
//! ```
//!
//! Not hardened for production use: arithmetic is not constant time and group
//! parameters are only validated on request.

// Declaring our library as `no-std` unconditionally lets us be consistent
// in how we `use` items from `std` or `core`
#![no_std]

// We always pull in `std` during tests, because it's just easier
// to write tests when you can assume you're on a capable platform
#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod error;

#[allow(clippy::many_single_char_names)]
pub mod helper;

pub mod random;

#[allow(clippy::many_single_char_names)]
pub mod signature;

pub mod types;

pub use error::{Result, SignatureError};
pub use helper::Helper;
pub use random::{Random, RandomSource, DEFAULT_PRIMALITY_ROUNDS};
pub use signature::{ElGamal, MAX_NONCE_ATTEMPTS};
pub use types::{
    floor_mod, GroupParameters, KeyPair, ModuloOperations, PrivateKey, PublicKey, Signature,
};
