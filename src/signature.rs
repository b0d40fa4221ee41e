use crate::error::{Result, SignatureError};
use crate::helper::Helper;
use crate::random::{Random, RandomSource};
use crate::types::{floor_mod, ModuloOperations, PrivateKey, PublicKey, Signature};
use log::{debug, trace};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Upper bound on nonce draws before signing gives up.
pub const MAX_NONCE_ATTEMPTS: usize = 1024;

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct ElGamal;

impl ElGamal {
    /// Returns an ElGamal signature of a message
    /// - (s1, s2) = (a^k, k^-1 * (H(m) - x * s1) mod (q-1))
    ///
    /// A fresh nonce k is drawn from `rng` for every call.
    ///
    /// ## Arguments
    ///
    /// * `message` - The message to sign
    /// * `sk`      - The private key
    /// * `rng`     - The randomness source used to draw the nonce
    pub fn sign<R: RandomSource + ?Sized>(
        message: &[u8],
        sk: &PrivateKey,
        rng: &mut R,
    ) -> Result<Signature> {
        Self::sign_with_attempts(message, sk, rng, MAX_NONCE_ATTEMPTS)
    }

    /// Same as [`ElGamal::sign`] with a custom bound on the number of nonce draws.
    pub fn sign_with_attempts<R: RandomSource + ?Sized>(
        message: &[u8],
        sk: &PrivateKey,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Signature> {
        let params = &sk.params;
        params.check()?;
        sk.check()?;

        let m = Helper::hash_message(message, &params.q)?;
        let k = Random::generate_nonce(params, rng, max_attempts)?;
        Self::sign_hashed(&m, sk, &k)
    }

    /// Signs using the thread local random number generator.
    #[cfg(any(feature = "std", test))]
    pub fn sign_thread_rng(message: &[u8], sk: &PrivateKey) -> Result<Signature> {
        let mut rng = rand::thread_rng();
        Self::sign(message, sk, &mut rng)
    }

    /// Returns an ElGamal signature computed with a caller supplied nonce.
    ///
    /// The nonce must be in [1, q-2], coprime with q-1 and never be used for
    /// two different messages.
    ///
    /// ## Arguments
    ///
    /// * `message` - The message to sign
    /// * `sk`      - The private key
    /// * `k`       - The nonce
    pub fn sign_with_nonce(message: &[u8], sk: &PrivateKey, k: &BigUint) -> Result<Signature> {
        let params = &sk.params;
        params.check()?;
        sk.check()?;
        if !Random::is_valid_nonce(params, k) {
            return Err(SignatureError::InvalidNonce);
        }

        let m = Helper::hash_message(message, &params.q)?;
        Self::sign_hashed(&m, sk, k)
    }

    fn sign_hashed(m: &BigUint, sk: &PrivateKey, k: &BigUint) -> Result<Signature> {
        let q = &sk.params.q;
        let a = &sk.params.a;
        let order = sk.params.order();

        // s1 = a^k mod q
        let s1 = a.modpow(k, q);

        // k^-1 mod (q-1), defined since gcd(k, q-1) = 1
        let k_inv = k.invmod(&order)?;

        // s2 = k^-1 * (m - x * s1) mod (q-1)
        // m - x * s1 is negative most of the time
        let difference = BigInt::from(m.clone()) - BigInt::from(&sk.x * &s1);
        let s2 = floor_mod(&(BigInt::from(k_inv) * difference), &order);

        debug!("signed message for a {}-bit modulus", q.bits());
        Ok(Signature { s1, s2 })
    }

    /// Verifies an ElGamal signature
    /// - v1 = a^H(m) mod q
    /// - v2 = y^s1 * s1^s2 mod q
    ///
    /// Returns true if v1 == v2. Degenerate parameters yield false.
    ///
    /// ## Arguments
    ///
    /// * `message`   - The signed message
    /// * `signature` - The signature (s1, s2)
    /// * `pk`        - The public key of the signer
    pub fn verify(message: &[u8], signature: &Signature, pk: &PublicKey) -> bool {
        let params = &pk.params;
        if params.check().is_err() {
            debug!("verification rejected: degenerate group parameters");
            return false;
        }
        let q = &params.q;

        let m = match Helper::hash_message(message, q) {
            Ok(m) => m,
            Err(_) => return false,
        };

        let v1 = params.a.modpow(&m, q);
        let y_pow_s1 = pk.y.modpow(&signature.s1, q);
        let s1_pow_s2 = signature.s1.modpow(&signature.s2, q);
        let v2 = y_pow_s1.modmul(&s1_pow_s2, q);
        trace!("verification check: v1 = {}, v2 = {}", v1, v2);

        let valid = v1 == v2;
        debug!("signature valid: {}", valid);
        valid
    }

    /// Verifies an ElGamal signature after checking that s1 ∈ [1, q-1] and
    /// s2 ∈ [0, q-2].
    pub fn verify_strict(message: &[u8], signature: &Signature, pk: &PublicKey) -> bool {
        let q = &pk.params.q;
        let order = pk.params.order();
        if signature.s1.is_zero() || signature.s1 >= *q || signature.s2 >= order {
            debug!("verification rejected: signature out of range");
            return false;
        }
        Self::verify(message, signature, pk)
    }
}
