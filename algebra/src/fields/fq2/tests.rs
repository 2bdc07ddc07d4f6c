use super::*;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::rc::Rc;

fn fq(q: u64, v: u64) -> Fq {
    Fq::new(Rc::new(BigUint::from(q)), BigUint::from(v))
}

fn test_rng() -> XorShiftRng {
    XorShiftRng::from_seed([
        0x5d, 0xbe, 0x62, 0x59, 0x8d, 0x31, 0x3d, 0x76, 0x32, 0x37, 0xdb, 0x17, 0xe5, 0xbc, 0x06,
        0x54,
    ])
}

#[test]
fn frobenius_swaps_coordinates_and_trace_matches() {
    // Pinned: q = 111347, (376, 138)^q = (138, 376); Tr((376,138)) = -(376+138) mod q.
    let q = 111347u64;
    let a = Fq2::new(fq(q, 376), fq(q, 138));
    assert_eq!(a.frobenius(), Fq2::new(fq(q, 138), fq(q, 376)));
    assert_eq!(a.pow(&BigUint::from(q)), a.frobenius());

    let expected_trace = -fq(q, 376 + 138);
    assert_eq!(a.trace(), expected_trace);
}

#[test]
fn multiplication_matches_pinned_formula() {
    // Pinned: q = 889673, (a,b)*(c,d) = (bd-ad-bc, ac-ad-bc).
    let q = 889673u64;
    let mut rng = test_rng();
    for _ in 0..50 {
        let a = fq(q, rng.gen_range(0..q));
        let b = fq(q, rng.gen_range(0..q));
        let c = fq(q, rng.gen_range(0..q));
        let d = fq(q, rng.gen_range(0..q));
        let x = Fq2::new(a.clone(), b.clone());
        let y = Fq2::new(c.clone(), d.clone());

        let bd_ad_bc = b.clone() * d.clone() - a.clone() * d.clone() - b.clone() * c.clone();
        let ac_ad_bc = a.clone() * c.clone() - a.clone() * d.clone() - b.clone() * c.clone();

        assert_eq!(x.clone() * y.clone(), Fq2::new(bd_ad_bc, ac_ad_bc));
    }
}

#[test]
fn inverse_round_trips() {
    let q = 889673u64;
    let a = Fq2::new(fq(q, 12345), fq(q, 6789));
    let one = a.inv().unwrap().inv().unwrap();
    assert_eq!(a, one);
}

#[test]
fn inverse_is_multiplicative_identity() {
    let q = 111347u64;
    let a = Fq2::new(fq(q, 40000), fq(q, 7));
    let inv = a.inv().unwrap();
    assert_eq!(a * inv, Fq2::int_to_fq2(&fq(q, 0), 1));
}

#[test]
fn eq_against_fq_uses_operand_not_free_variable() {
    let q = 89u64;
    let n = fq(q, 11);
    let embedded = Fq2::from_fq(&n);
    assert!(embedded.eq_fq(&n));
    let other = fq(q, 12);
    assert!(!embedded.eq_fq(&other));
}

#[test]
fn integer_embedding_matches_n_copies_of_one() {
    // n * (1-embedding), computed as repeated addition, equals the n-embedding.
    let q = 13u64;
    let one = Fq2::int_to_fq2(&fq(q, 0), 1);
    for n in 1..8i64 {
        let mut acc = one.zero_like();
        for _ in 0..n {
            acc = acc + one.clone();
        }
        assert_eq!(acc, Fq2::int_to_fq2(&fq(q, 0), n));
    }
}
