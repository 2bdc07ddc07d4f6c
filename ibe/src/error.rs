//! Error taxonomy for the Boneh–Franklin layer. `algebra`'s
//! [`PairingError::Pole`] is an expected, retried-internally condition —
//! it only escapes here, as [`IbeError::PairingRetriesExhausted`], once
//! the bounded resampling loop in [`crate::weil`] gives up.

use algebra::{CurveError, FieldError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbeError {
    #[error("no prime l found in the requested interval after {0} attempts")]
    InvalidParameter(u32),

    #[error("modified Weil pairing did not land off the identity after {0} resamples of S")]
    PairingRetriesExhausted(u32),

    #[error("hash-to-curve for this identity repeatedly produced the identity point after {0} attempts")]
    HashToCurveFailure(u32),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Field(#[from] FieldError),
}
