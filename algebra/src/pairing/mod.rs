//! Miller's algorithm and the (unmodified) Weil pairing (§4.4/§4.5),
//! generic over any [`Field`]/[`Curve`] pair. The IBE layer is responsible
//! for the distortion map and for resampling the auxiliary point `S` on a
//! [`PairingError::Pole`] — this module only ever computes one attempt.

#[cfg(test)]
mod tests;

use crate::curves::{Curve, Point};
use crate::error::PairingError;
use crate::fields::Field;
use crate::BigUint;

/// Unwrap a point's affine coordinates. `O` here means a Miller
/// evaluation hit the identity — e.g. `weil_pairing`'s `Q+S` or `P-S`
/// landing on `O` for an unlucky auxiliary point `S` — which is the
/// same recoverable-by-resampling condition as a line function's pole
/// (§4.5/§7), so it is reported as [`PairingError::Pole`] rather than
/// panicking.
fn affine_parts<F: Field>(p: &Point<F>) -> Result<(&F, &F), PairingError> {
    match p {
        Point::Affine { x, y } => Ok((x, y)),
        Point::Infinity => Err(PairingError::Pole),
    }
}

/// `g_{U,V}(R)`: the line through `U` and `V` (or the tangent at `U` when
/// `U = V`), evaluated at `R` (§4.4). A zero denominator — `R` landing on
/// a pole of the line function — is the one condition this library expects
/// a caller to retry on, so it is reported as [`PairingError::Pole`]
/// instead of propagating as a bare field error.
fn line<F: Field>(curve: &Curve<F>, u: &Point<F>, v: &Point<F>, r: &Point<F>) -> Result<F, PairingError> {
    let (ux, uy) = affine_parts(u)?;
    let (vx, vy) = affine_parts(v)?;
    let (rx, ry) = affine_parts(r)?;

    let lambda = if ux == vx && uy == vy {
        if uy.is_zero() {
            return Ok(rx.clone() - ux.clone());
        }
        let three = ux.from_int(3);
        let two = uy.from_int(2);
        let numerator = three * ux.square() + curve.a.clone();
        let denominator = two * uy.clone();
        numerator.div(&denominator).map_err(|_| PairingError::Pole)?
    } else if ux == vx {
        return Ok(rx.clone() - ux.clone());
    } else {
        let numerator = vy.clone() - uy.clone();
        let denominator = vx.clone() - ux.clone();
        numerator.div(&denominator).map_err(|_| PairingError::Pole)?
    };

    let numerator = ry.clone() - uy.clone() - lambda.clone() * (rx.clone() - ux.clone());
    let denominator = rx.clone() + ux.clone() + vx.clone() - lambda.square();
    checked_div(numerator, denominator)
}

fn checked_div<F: Field>(numerator: F, denominator: F) -> Result<F, PairingError> {
    numerator.div(&denominator).map_err(|_| PairingError::Pole)
}

/// Miller's algorithm: `f_P(R)` with `div(f_P) = m[P] - [mP] - (m-1)[O]`
/// (§4.4). `bits` is the MSB-first binary expansion of `m`; the leading
/// bit is consumed before the loop starts (`t <- P`), matching the
/// reference's `for i in range(1, n)`.
pub fn miller<F: Field>(
    curve: &Curve<F>,
    p: &Point<F>,
    m: &BigUint,
    r: &Point<F>,
) -> Result<F, PairingError> {
    let witness = affine_parts(r)?.0.clone();
    let mut t = p.clone();
    let mut f = witness.one_like();
    let bits = m.to_radix_be(2);

    for bit in bits.into_iter().skip(1) {
        let g_tt = line(curve, &t, &t, r)?;
        f = (f.clone() * f) * g_tt;
        t = curve.add(&t, &t);
        if bit == 1 {
            let g_tp = line(curve, &t, p, r)?;
            f = f * g_tp;
            t = curve.add(&t, p);
        }
    }
    Ok(f)
}

/// `e_m(P, Q) = (f_P(Q+S)/f_P(S)) / (f_Q(P-S)/f_Q(-S))` (§4.5). Callers
/// needing the modified (non-degenerate) pairing apply the distortion map
/// to `Q` before calling this, and retry with a fresh `S` on
/// [`PairingError::Pole`].
pub fn weil_pairing<F: Field>(
    curve: &Curve<F>,
    p: &Point<F>,
    q: &Point<F>,
    s: &Point<F>,
    m: &BigUint,
) -> Result<F, PairingError> {
    let q_plus_s = curve.add(q, s);
    let p_minus_s = curve.sub(p, s);
    let neg_s = s.negate();

    let f_p_qs = miller(curve, p, m, &q_plus_s)?;
    let f_p_s = miller(curve, p, m, s)?;
    let f_q_ps = miller(curve, q, m, &p_minus_s)?;
    let f_q_neg_s = miller(curve, q, m, &neg_s)?;

    let numer = checked_div(f_p_qs, f_p_s)?;
    let denom = checked_div(f_q_ps, f_q_neg_s)?;
    checked_div(numer, denom)
}
