use crate::error::{Result, SignatureError};
use core::fmt;
use core::mem;
use core::ops::{Mul, Sub};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupParameters {
    // prime modulus: q
    pub q: BigUint,

    // primitive root mod q: a
    pub a: BigUint,
}

impl GroupParameters {
    /// Creates a new parameter set after the basic sanity checks:
    /// `q > 2` and `1 < a < q`.
    ///
    /// Neither the primality of `q` nor the order of `a` is checked here,
    /// see [`Helper::validate`](crate::helper::Helper::validate) for that.
    pub fn new(q: BigUint, a: BigUint) -> Result<Self> {
        let params = GroupParameters { q, a };
        params.check()?;
        if params.a <= BigUint::one() || params.a >= params.q {
            return Err(SignatureError::InvalidParameters(
                "generator a must be in [2, q-1]",
            ));
        }
        Ok(params)
    }

    // order of the multiplicative group Z*_q: q - 1
    pub fn order(&self) -> BigUint {
        if self.q.is_zero() {
            return BigUint::zero();
        }
        self.q.clone().sub(BigUint::one())
    }

    /// Fails if `q <= 2`, i.e. if the nonce range `[1, q-2]` is empty.
    pub(crate) fn check(&self) -> Result<()> {
        if self.q <= BigUint::from(2u32) {
            return Err(SignatureError::InvalidParameters(
                "modulus q must be greater than 2",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    // group parameters (q, a)
    pub params: GroupParameters,

    // public key: y = a^x mod q
    pub y: BigUint,
}

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PrivateKey {
    // group parameters (q, a)
    pub params: GroupParameters,

    // private key: x ∈ [1, q-1]
    pub x: BigUint,
}

impl PrivateKey {
    pub(crate) fn check(&self) -> Result<()> {
        if self.x.is_zero() || self.x >= self.params.q {
            return Err(SignatureError::InvalidPrivateKey);
        }
        Ok(())
    }
}

// the exponent is never printed
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("params", &self.params)
            .field("x", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct KeyPair {
    pub private: PrivateKey,
    pub public: PublicKey,
}

#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    // s1 = a^k mod q
    // - a: generator
    // - k: nonce (k ∈ [1, q-2], gcd(k, q-1) = 1)
    pub s1: BigUint,

    // s2 = k^-1 * (m - x * s1) mod (q-1)
    // - m: hashed message
    // - x: private key
    pub s2: BigUint,
}

pub trait ModuloOperations {
    /// Calculates the modular multiplication of a BigUint: result = self * rhs % modulus.
    ///
    /// Panics if the modulus is zero.
    fn modmul(&self, rhs: &Self, modulus: &Self) -> Self;

    /// Calculates the modular subtraction of two BigUints: result = (self - other) % modulus.
    /// The result is always in [0, modulus).
    ///
    /// Panics if the modulus is zero.
    fn modsub(&self, other: &Self, modulus: &Self) -> Self;

    /// Calculates the modular multiplicative inverse x of an integer a such that ax ≡ 1 (mod m).
    /// Alternative formulation: a^-1 (mod m)
    ///
    /// Returns `SignatureError::InverseNotFound` if `gcd(a, m) != 1` or `m <= 1`.
    fn invmod(&self, modulus: &Self) -> Result<BigUint>;
}

impl ModuloOperations for BigUint {
    fn modmul(&self, multiplier: &Self, modulus: &Self) -> Self {
        assert!(
            !modulus.is_zero(),
            "attempt to calculate with zero modulus!"
        );
        self.mul(multiplier) % modulus
    }

    fn modsub(&self, other: &Self, modulus: &Self) -> Self {
        assert!(
            !modulus.is_zero(),
            "attempt to calculate with zero modulus!"
        );
        // both operands are reduced first, so adding the modulus keeps the
        // difference non-negative
        let lhs = self % modulus;
        let rhs = other % modulus;
        (lhs + modulus - rhs) % modulus
    }

    fn invmod(&self, modulus: &Self) -> Result<BigUint> {
        if *modulus <= BigUint::one() {
            return Err(SignatureError::InverseNotFound);
        }
        let one = BigInt::one();
        let mut a = BigInt::from(self.clone());
        let mut m = BigInt::from(modulus.clone());

        // bézout coefficients of a
        let mut x0 = BigInt::zero();
        let mut x1 = BigInt::one();

        while a > one {
            // a and m share a factor greater than one
            if m.is_zero() {
                return Err(SignatureError::InverseNotFound);
            }
            let quotient = &a / &m;
            let remainder = &a % &m;
            a = mem::replace(&mut m, remainder);

            let next = &x1 - &quotient * &x0;
            x1 = mem::replace(&mut x0, next);
        }

        // self is a multiple of the modulus
        if a.is_zero() {
            return Err(SignatureError::InverseNotFound);
        }
        Ok(floor_mod(&x1, modulus))
    }
}

/// Reduces a signed integer into `[0, modulus)`.
///
/// `%` on `BigInt` keeps the sign of the dividend, so the remainder is
/// shifted by the modulus once before the final reduction.
pub fn floor_mod(value: &BigInt, modulus: &BigUint) -> BigUint {
    assert!(
        !modulus.is_zero(),
        "attempt to calculate with zero modulus!"
    );
    let m = BigInt::from(modulus.clone());
    let result = ((value % &m) + &m) % &m;
    // result is never negative at this point
    result.to_biguint().unwrap_or_default()
}
