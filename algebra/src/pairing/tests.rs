use super::*;
use crate::fields::fq::Fq;
use std::rc::Rc;

fn fq(q: u64, v: u64) -> Fq {
    Fq::new(Rc::new(BigUint::from(q)), BigUint::from(v))
}

fn point(q: u64, x: u64, y: u64) -> Point<Fq> {
    Point::affine(fq(q, x), fq(q, y))
}

#[test]
fn pinned_weil_pairing_over_f631() {
    // q=631, y^2=x^3+30x+34, P=(36,60), m=5, Q=(121,387), S=(0,36):
    // f_P(Q+S)=103, f_P(S)=219, quotient=473;
    // f_Q(P-S)=284, f_Q(-S)=204, quotient=88; e=242.
    let q = 631u64;
    let curve = Curve::new(fq(q, 30), fq(q, 34)).unwrap();
    let p = point(q, 36, 60);
    let qq = point(q, 121, 387);
    let s = point(q, 0, 36);
    let m = BigUint::from(5u32);

    assert!(curve.on_curve(&p));
    assert!(curve.on_curve(&qq));
    assert!(curve.on_curve(&s));

    let q_plus_s = curve.add(&qq, &s);
    let p_minus_s = curve.sub(&p, &s);
    let neg_s = s.negate();

    let f_p_qs = miller(&curve, &p, &m, &q_plus_s).unwrap();
    assert_eq!(f_p_qs, fq(q, 103));
    let f_p_s = miller(&curve, &p, &m, &s).unwrap();
    assert_eq!(f_p_s, fq(q, 219));
    let numer = checked_div(f_p_qs, f_p_s).unwrap();
    assert_eq!(numer, fq(q, 473));

    let f_q_ps = miller(&curve, &qq, &m, &p_minus_s).unwrap();
    assert_eq!(f_q_ps, fq(q, 284));
    let f_q_neg_s = miller(&curve, &qq, &m, &neg_s).unwrap();
    assert_eq!(f_q_neg_s, fq(q, 204));
    let denom = checked_div(f_q_ps, f_q_neg_s).unwrap();
    assert_eq!(denom, fq(q, 88));

    let e = weil_pairing(&curve, &p, &qq, &s, &m).unwrap();
    assert_eq!(e, fq(q, 242));
}

#[test]
fn pole_on_evaluator_sharing_doubled_points_x_is_reported() {
    // F_q=13, a=3, b=8: P=(9,7), [2]P=(9,6) (pinned). Evaluating the
    // tangent at P at R=[2]P makes the line function's denominator
    // R.x + 2*P.x - lambda^2 vanish, which is exactly the pole condition
    // a resampled auxiliary point is meant to avoid.
    let q = 13u64;
    let curve = Curve::new(fq(q, 3), fq(q, 8)).unwrap();
    let p = point(q, 9, 7);
    let r = point(q, 9, 6);
    let result = miller(&curve, &p, &BigUint::from(3u32), &r);
    assert_eq!(result, Err(PairingError::Pole));
}

#[test]
fn evaluator_landing_on_infinity_is_reported_as_pole() {
    // Same F_631 curve as the pinned vector above. Choosing S = P makes
    // P - S = O, the evaluator `weil_pairing` feeds to f_Q; an evaluator
    // at the identity must be retried the same way a line-function pole
    // is, not panic.
    let q = 631u64;
    let curve = Curve::new(fq(q, 30), fq(q, 34)).unwrap();
    let p = point(q, 36, 60);
    let qq = point(q, 121, 387);
    let m = BigUint::from(5u32);

    let result = weil_pairing(&curve, &p, &qq, &p, &m);
    assert_eq!(result, Err(PairingError::Pole));
}
