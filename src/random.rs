use crate::error::{Result, SignatureError};
use crate::types::GroupParameters;
use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;

/// Miller-Rabin rounds used by [`Helper::validate`](crate::helper::Helper::validate).
pub const DEFAULT_PRIMALITY_ROUNDS: u32 = 40;

/// A source of uniformly distributed integers.
///
/// Every `rand` generator is a `RandomSource`. The core never seeds or stores
/// the source, it is borrowed for the duration of a single call.
pub trait RandomSource {
    /// Returns a uniformly random integer in `[lo, hi]` (both inclusive).
    ///
    /// Callers guarantee `lo <= hi`.
    fn random_in_range(&mut self, lo: &BigUint, hi: &BigUint) -> BigUint;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn random_in_range(&mut self, lo: &BigUint, hi: &BigUint) -> BigUint {
        // gen_biguint_range excludes the upper bound
        let upper_bound = hi + 1u32;
        self.gen_biguint_range(lo, &upper_bound)
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Random;

impl Random {
    /// Draws a nonce k ∈ [1, q-2] with gcd(k, q-1) = 1 by rejection sampling.
    ///
    /// Gives up after `max_attempts` draws.
    ///
    /// Arguments
    /// * `params` - group parameters (q, a)
    /// * `rng` - the randomness source
    /// * `max_attempts` - upper bound on the number of draws
    pub fn generate_nonce<R: RandomSource + ?Sized>(
        params: &GroupParameters,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<BigUint> {
        params.check()?;
        let one = BigUint::one();
        let order = params.order();
        let upper_bound = &order - &one;

        for attempt in 1..=max_attempts {
            let k = rng.random_in_range(&one, &upper_bound);
            if k.gcd(&order).is_one() {
                debug!("nonce accepted after {} draw(s)", attempt);
                return Ok(k);
            }
        }
        Err(SignatureError::NonceExhausted(max_attempts))
    }

    /// Returns true if k ∈ [1, q-2] and gcd(k, q-1) = 1.
    pub fn is_valid_nonce(params: &GroupParameters, k: &BigUint) -> bool {
        let order = params.order();
        !k.is_zero() && *k < order && k.gcd(&order).is_one()
    }

    /// Miller-Rabin Primality Test
    ///
    /// https://en.wikipedia.org/wiki/Miller-Rabin_primality_test
    pub fn is_prime<R: RandomSource + ?Sized>(num: &BigUint, certainty: u32, rng: &mut R) -> bool {
        let zero = BigUint::zero();
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        let three = BigUint::from(3u32);

        if *num == two || *num == three {
            return true;
        }

        if *num < two || num % &two == zero {
            return false;
        }

        let num_less_one = num - &one;
        let num_less_two = num - &two;

        // write n-1 as 2^s * d
        let mut d = num_less_one.clone();
        let mut s = 0u64;

        while &d % &two == zero {
            d /= &two;
            s += 1;
        }

        // test for probable prime
        'witness: for _ in 0..certainty {
            let a = rng.random_in_range(&two, &num_less_two);
            let mut x = a.modpow(&d, num);
            if x == one || x == num_less_one {
                continue;
            }
            for _ in 1..s {
                x = x.modpow(&two, num);
                if x == num_less_one {
                    continue 'witness;
                }
                if x == one {
                    return false;
                }
            }
            return false;
        }
        true
    }
}
