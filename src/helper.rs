use crate::error::{Result, SignatureError};
use crate::random::{Random, RandomSource};
use crate::types::{GroupParameters, KeyPair, PrivateKey, PublicKey};
use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha2::{Digest, Sha256};

pub struct Helper;

impl Helper {
    /// Generates a key pair for the given group parameters.
    /// - x: uniformly random in [1, q-1]
    /// - y = a^x mod q
    ///
    /// ## Arguments
    ///
    /// * `params` - The group parameters (q, a)
    /// * `rng`    - The randomness source used to draw the private key
    pub fn generate_key_pair<R: RandomSource + ?Sized>(
        params: &GroupParameters,
        rng: &mut R,
    ) -> Result<KeyPair> {
        params.check()?;
        let x = rng.random_in_range(&BigUint::one(), &params.order());
        debug!("generated key pair for a {}-bit modulus", params.q.bits());
        Helper::key_pair_from_private(params, &x)
    }

    /// Generates a key pair using the thread local random number generator.
    #[cfg(any(feature = "std", test))]
    pub fn generate_key_pair_thread_rng(params: &GroupParameters) -> Result<KeyPair> {
        let mut rng = rand::thread_rng();
        Helper::generate_key_pair(params, &mut rng)
    }

    /// Derives the key pair belonging to a known private exponent x ∈ [1, q-1].
    pub fn key_pair_from_private(params: &GroupParameters, x: &BigUint) -> Result<KeyPair> {
        params.check()?;
        let private = PrivateKey {
            params: params.clone(),
            x: x.clone(),
        };
        private.check()?;

        let y = params.a.modpow(x, &params.q);
        let public = PublicKey {
            params: params.clone(),
            y,
        };
        Ok(KeyPair { private, public })
    }

    /// Hashes a message with SHA-256 and reduces the digest into [0, q).
    pub fn hash_message(message: &[u8], q: &BigUint) -> Result<BigUint> {
        Helper::hash_message_with::<Sha256>(message, q)
    }

    /// Hashes a message with the digest `D`, interprets the digest as a
    /// big-endian unsigned integer and reduces it into [0, q).
    pub fn hash_message_with<D: Digest>(message: &[u8], q: &BigUint) -> Result<BigUint> {
        if q.is_zero() {
            return Err(SignatureError::InvalidParameters(
                "modulus q must be greater than zero",
            ));
        }
        let hash = D::digest(message);
        Ok(BigUint::from_bytes_be(&hash) % q)
    }

    /// Checks that a is a primitive root modulo q.
    ///
    /// `factors` must hold every distinct prime factor of q-1. The generator is
    /// valid if a^((q-1)/f) != 1 mod q for all of them.
    pub fn is_primitive_root(params: &GroupParameters, factors: &[BigUint]) -> bool {
        let one = BigUint::one();
        let q = &params.q;
        let a = &params.a;
        if params.check().is_err() || *a <= one || a >= q {
            return false;
        }

        let order = params.order();
        factors.iter().all(|factor| {
            if factor <= &one || !(&order % factor).is_zero() {
                return false;
            }
            let exponent = &order / factor;
            a.modpow(&exponent, q) != one
        })
    }

    /// Validates group parameters: q > 2 and (probably) prime, a a primitive
    /// root modulo q.
    ///
    /// Not part of signing or verification, callers decide when to pay for it.
    pub fn validate<R: RandomSource + ?Sized>(
        params: &GroupParameters,
        factors: &[BigUint],
        rounds: u32,
        rng: &mut R,
    ) -> Result<()> {
        params.check()?;
        if !Random::is_prime(&params.q, rounds, rng) {
            return Err(SignatureError::InvalidParameters("modulus q is not prime"));
        }
        if !Helper::is_primitive_root(params, factors) {
            return Err(SignatureError::InvalidParameters(
                "a is not a primitive root modulo q",
            ));
        }
        Ok(())
    }

    // helper function to setup a signature system before a test
    #[cfg(test)]
    pub(crate) fn setup_system(q: &[u8], a: &[u8], x: &[u8]) -> (GroupParameters, KeyPair) {
        let params = GroupParameters {
            q: BigUint::parse_bytes(q, 10).unwrap(),
            a: BigUint::parse_bytes(a, 10).unwrap(),
        };
        let x = BigUint::parse_bytes(x, 10).unwrap();
        let keys = Helper::key_pair_from_private(&params, &x).unwrap();
        (params, keys)
    }
}
