//! The `Field` abstraction the curve and pairing layers are generic over
//! (Design Notes §9: `Field { add, sub, mul, inv, pow, from_int, eq }`).
//!
//! Every implementation here carries its modulus at run time rather than
//! as a compile-time parameter, so the trait's integer-embedding and
//! identity-element methods take `&self` purely as a witness of *which*
//! field to embed into — they do not read `self`'s value.

pub mod fq;
pub mod fq2;

use crate::error::FieldError;
use crate::BigUint;
use num_traits::Zero;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A field element. Arithmetic between elements carrying different moduli
/// is a precondition violation (`assert_eq!` inside each implementation),
/// not a recoverable error — the same "bugs are not failures" stance the
/// library takes for `DivisionByZero` (§7).
pub trait Field:
    Clone
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Sized
{
    /// `true` iff `self` is the additive identity.
    fn is_zero(&self) -> bool;

    /// The additive identity in the same field as `self`.
    fn zero_like(&self) -> Self;

    /// The multiplicative identity in the same field as `self`.
    fn one_like(&self) -> Self;

    /// `self^-1`, via Fermat's little theorem (§4.1). Precondition:
    /// `self` is non-zero; violating it is `FieldError::DivisionByZero`.
    fn inv(&self) -> Result<Self, FieldError>;

    /// `self^e` via left-to-right square-and-multiply (§4.1/§4.2).
    fn pow(&self, e: &BigUint) -> Self;

    /// Embed the integer `n` into the same field as `self` (the
    /// `int_to_fq`/`int_to_fq2` family in §4.2's data model).
    fn from_int(&self, n: i64) -> Self;

    fn square(&self) -> Self {
        self.clone() * self.clone()
    }

    fn double(&self) -> Self {
        self.clone() + self.clone()
    }

    /// `self / other`, precondition `other` non-zero (§4.1).
    fn div(&self, other: &Self) -> Result<Self, FieldError> {
        Ok(self.clone() * other.inv()?)
    }
}

/// Left-to-right square-and-multiply over the bits of `e`, generic over
/// any [`Field`]. `Fq` implements `pow` directly against `BigUint`
/// (cheaper, no intermediate field elements); `Fq2` and anything built on
/// top of it uses this instead (§4.2: "Exponentiation by a non-negative
/// integer uses square-and-multiply").
pub fn pow_generic<F: Field>(base: &F, e: &BigUint) -> F {
    if e.is_zero() {
        return base.one_like();
    }
    let bits = e.to_radix_be(2);
    let mut result = base.one_like();
    for bit in bits {
        result = result.square();
        if bit == 1 {
            result = result * base.clone();
        }
    }
    result
}
