//! `F_q`: the integers modulo a prime `q`, carried at run time (§4.1).

#[cfg(test)]
mod tests;

use crate::error::FieldError;
use crate::fields::Field;
use crate::modular::{mod_inverse_fermat, mod_pow};
use crate::BigUint;
use num_traits::Zero;
use std::ops::{Add, Mul, Neg, Sub};
use std::rc::Rc;

/// An element of `F_q`. `modulus` is shared (via `Rc`) across every value
/// sampled from the same `SETUP` call, so cloning an `Fq` is cheap apart
/// from the value itself.
#[derive(Clone, Debug)]
pub struct Fq {
    modulus: Rc<BigUint>,
    value: BigUint,
}

impl Fq {
    /// Construct `n mod modulus`. Precondition: `modulus` is prime (callers
    /// go through [`crate::primality::is_probable_prime`] before this is
    /// ever invoked from `SETUP`); this constructor itself does not
    /// re-check primality, matching the Python reference's `Fq(q)` factory
    /// trusting its caller.
    pub fn new(modulus: Rc<BigUint>, n: BigUint) -> Self {
        let value = &n % &*modulus;
        Fq { modulus, value }
    }

    pub fn modulus(&self) -> &Rc<BigUint> {
        &self.modulus
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    fn same_field(&self, other: &Fq) {
        assert_eq!(
            self.modulus, other.modulus,
            "Fq values from different moduli combined"
        );
    }
}

impl PartialEq for Fq {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.value == other.value
    }
}
impl Eq for Fq {}

impl Field for Fq {
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn zero_like(&self) -> Self {
        Fq::new(self.modulus.clone(), BigUint::zero())
    }

    fn one_like(&self) -> Self {
        Fq::new(self.modulus.clone(), BigUint::from(1u32))
    }

    fn inv(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(Fq::new(
            self.modulus.clone(),
            mod_inverse_fermat(&self.value, &self.modulus),
        ))
    }

    fn pow(&self, e: &BigUint) -> Self {
        Fq::new(self.modulus.clone(), mod_pow(&self.value, e, &self.modulus))
    }

    fn from_int(&self, n: i64) -> Self {
        int_to_fq(self.modulus.clone(), n)
    }
}

/// Embed a signed integer into `F_q`, reducing negative values into
/// `[0, q)` the way `_Fq.__init__` does (`self._n = n % self._q`, and
/// Python's `%` is always non-negative for a positive modulus).
pub fn int_to_fq(modulus: Rc<BigUint>, n: i64) -> Fq {
    let m = &*modulus;
    let reduced = if n >= 0 {
        BigUint::from(n as u64) % m
    } else {
        let pos = BigUint::from((-n) as u64) % m;
        if pos.is_zero() {
            BigUint::zero()
        } else {
            m - pos
        }
    };
    Fq::new(modulus, reduced)
}

impl Add for Fq {
    type Output = Fq;
    fn add(self, rhs: Fq) -> Fq {
        self.same_field(&rhs);
        Fq::new(self.modulus.clone(), (&self.value + &rhs.value) % &*self.modulus)
    }
}

impl Sub for Fq {
    type Output = Fq;
    fn sub(self, rhs: Fq) -> Fq {
        self.same_field(&rhs);
        let m = &*self.modulus;
        let value = if self.value >= rhs.value {
            (&self.value - &rhs.value) % m
        } else {
            m - ((&rhs.value - &self.value) % m)
        };
        Fq::new(self.modulus.clone(), value)
    }
}

impl Mul for Fq {
    type Output = Fq;
    fn mul(self, rhs: Fq) -> Fq {
        self.same_field(&rhs);
        Fq::new(self.modulus.clone(), (&self.value * &rhs.value) % &*self.modulus)
    }
}

impl Neg for Fq {
    type Output = Fq;
    fn neg(self) -> Fq {
        let m = &*self.modulus;
        let value = if self.value.is_zero() {
            BigUint::zero()
        } else {
            m - &self.value
        };
        Fq::new(self.modulus.clone(), value)
    }
}

impl std::fmt::Display for Fq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
