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
fn pinned_addition_and_doubling_over_f13() {
    // F_q = 13, a = 3, b = 8: (9,7)+(1,8) = (2,10); [2](9,7) = (9,6).
    let curve = Curve::new(fq(13, 3), fq(13, 8)).unwrap();
    let p = point(13, 9, 7);
    let q = point(13, 1, 8);
    assert!(curve.on_curve(&p));
    assert!(curve.on_curve(&q));

    let sum = curve.add(&p, &q);
    assert_eq!(sum, point(13, 2, 10));

    let doubled = curve.add(&p, &p);
    assert_eq!(doubled, point(13, 9, 6));
    assert_eq!(curve.scalar_mul(&BigUint::from(2u32), &p), point(13, 9, 6));
}

#[test]
fn pinned_scalar_multiplication_over_f73() {
    // F_q = 73, a = 8, b = 7: [11](32,53) = (39,17).
    let curve = Curve::new(fq(73, 8), fq(73, 7)).unwrap();
    let p = point(73, 32, 53);
    assert!(curve.on_curve(&p));

    let result = curve.scalar_mul(&BigUint::from(11u32), &p);
    assert_eq!(result, point(73, 39, 17));
}

#[test]
fn identity_laws_hold() {
    let curve = Curve::new(fq(13, 3), fq(13, 8)).unwrap();
    let p = point(13, 9, 7);
    assert_eq!(curve.add(&p, &Point::Infinity), p);
    assert_eq!(curve.add(&Point::Infinity, &p), p);
    assert_eq!(curve.add(&p, &p.negate()), Point::Infinity);
    assert_eq!(curve.scalar_mul(&BigUint::from(0u32), &p), Point::Infinity);
}

#[test]
fn singular_discriminant_is_rejected() {
    // y^2 = x^3 has discriminant 0.
    assert!(matches!(
        Curve::new(fq(13, 0), fq(13, 0)),
        Err(CurveError::Singular)
    ));
}

#[test]
fn scalar_multiplication_matches_repeated_addition() {
    let curve = Curve::new(fq(73, 8), fq(73, 7)).unwrap();
    let p = point(73, 32, 53);
    let mut expected = Point::Infinity;
    for _ in 0..9 {
        expected = curve.add(&expected, &p);
    }
    assert_eq!(curve.scalar_mul(&BigUint::from(9u32), &p), expected);
}
