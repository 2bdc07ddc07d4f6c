//! The modified Weil pairing `e_hat(P, Q) = e_l(P, phi(Q))`, wrapped with
//! the bounded retry-on-pole loop §7 calls for (the original Python
//! `modified_weil_pairing` sampled its auxiliary point `S` once, with no
//! retry at all — a gap this fixes).

use crate::distortion::distort;
use crate::error::IbeError;
use crate::hash_to_curve::find_random_point;
use crate::rng::RandomSource;
use algebra::curves::{Curve, Point};
use algebra::fields::fq2::Fq2;
use algebra::pairing::weil_pairing;
use algebra::{BigUint, PairingError};
use std::rc::Rc;

pub const MAX_WEIL_RETRIES: u32 = 16;

/// `e_hat(p, q)` under the modified (distortion-applied) Weil pairing,
/// resampling the auxiliary point `S` up to [`MAX_WEIL_RETRIES`] times on
/// `PairingError::Pole` (§4.5/§7 `PairingDegenerate`).
pub fn modified_weil_pairing<R: RandomSource>(
    curve: &Curve<Fq2>,
    modulus: &Rc<BigUint>,
    p: &Point<Fq2>,
    q: &Point<Fq2>,
    ell: &BigUint,
    rng: &mut R,
) -> Result<Fq2, IbeError> {
    let distorted_q = distort(q);
    for attempt in 0..MAX_WEIL_RETRIES {
        let s = find_random_point(modulus, rng);
        match weil_pairing(curve, p, &distorted_q, &s, ell) {
            Ok(value) => return Ok(value),
            Err(PairingError::Pole) => {
                log::debug!("Weil pairing hit a pole on attempt {}, resampling S", attempt);
                continue;
            }
            Err(PairingError::Field(e)) => return Err(IbeError::Field(e)),
        }
    }
    Err(IbeError::PairingRetriesExhausted(MAX_WEIL_RETRIES))
}
