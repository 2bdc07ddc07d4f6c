//! Leaf arithmetic for a Boneh–Franklin identity-based encryption scheme:
//! prime-field arithmetic over `F_q`, its quadratic extension `F_{q^2}`
//! (reduction polynomial `T^2 + T + 1`), short-Weierstrass elliptic-curve
//! arithmetic generic over either field, and Miller's algorithm.
//!
//! Every type here is generic over a runtime-sampled modulus `q` rather
//! than a compile-time one: `SETUP` draws a fresh `q` on every call, so
//! there is no fixed curve family to monomorphize against.

pub mod error;
pub mod fields;
pub mod curves;
pub mod modular;
pub mod pairing;
pub mod primality;

pub use error::{CurveError, FieldError, PairingError};
pub use fields::{fq::Fq, fq2::Fq2, Field};
pub use curves::{Curve, Point};
pub use pairing::{miller, weil_pairing};

pub use num_bigint::BigUint;
