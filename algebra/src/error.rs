//! Error taxonomy for the leaf arithmetic, per the library's error-handling
//! design: a construction-time invariant that can genuinely fail from bad
//! caller input is a [`CurveError`]/[`FieldError`]; a pole hit inside
//! Miller's algorithm is the one condition a higher layer is expected to
//! retry on, so it gets its own [`PairingError`] rather than a panic.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("modulus {0} does not satisfy q mod 3 = 2, required for F_q2 and the curve's cube root")]
    ModulusNotCongruentToTwoMod3(String),

    #[error("division by zero in F_q / F_q2")]
    DivisionByZero,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("curve is singular: 4a^3 + 27b^2 = 0")]
    Singular,

    #[error(transparent)]
    Field(#[from] FieldError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// Miller's algorithm evaluated a line function at a pole or a zero;
    /// the auxiliary point must be resampled and the whole pairing retried.
    #[error("evaluator point landed on a pole/zero of the line function")]
    Pole,

    #[error(transparent)]
    Field(#[from] FieldError),
}
