use super::*;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

fn rc(q: u64) -> Rc<BigUint> {
    Rc::new(BigUint::from(q))
}

fn test_rng() -> XorShiftRng {
    XorShiftRng::from_seed([
        0x5d, 0xbe, 0x62, 0x59, 0x8d, 0x31, 0x3d, 0x76, 0x32, 0x37, 0xdb, 0x17, 0xe5, 0xbc, 0x06,
        0x54,
    ])
}

#[test]
fn inverse_is_fermat() {
    let m = rc(13);
    let a = Fq::new(m.clone(), BigUint::from(9u32));
    let inv = a.inv().unwrap();
    assert_eq!(a * inv, Fq::new(m, BigUint::from(1u32)));
}

#[test]
fn inverse_round_trips() {
    let m = rc(889673);
    let mut rng = test_rng();
    for _ in 0..50 {
        let v: u32 = rng.gen_range(1..889673);
        let a = Fq::new(m.clone(), BigUint::from(v));
        let inv_inv = a.inv().unwrap().inv().unwrap();
        assert_eq!(a, inv_inv);
    }
}

#[test]
fn fermat_little_theorem() {
    let m = rc(97);
    let a = Fq::new(m.clone(), BigUint::from(11u32));
    // a^q = a
    assert_eq!(a.pow(&BigUint::from(97u32)), a.clone());
    // a^(q-1) = 1 for a != 0
    assert_eq!(a.pow(&BigUint::from(96u32)), a.one_like());
}

#[test]
fn addition_is_associative() {
    let m = rc(111347);
    let a = Fq::new(m.clone(), BigUint::from(376u32));
    let b = Fq::new(m.clone(), BigUint::from(138u32));
    let c = Fq::new(m.clone(), BigUint::from(999u32));
    assert_eq!(
        (a.clone() + b.clone()) + c.clone(),
        a + (b + c)
    );
}

#[test]
fn negative_embedding_reduces_into_range() {
    let m = rc(13);
    let minus_one = int_to_fq(m.clone(), -1);
    assert_eq!(minus_one, Fq::new(m.clone(), BigUint::from(12u32)));
    let minus_six = int_to_fq(m, -6);
    assert_eq!(minus_six.value(), &BigUint::from(7u32));
}

#[test]
#[should_panic]
fn mismatched_moduli_panics() {
    let a = Fq::new(rc(13), BigUint::from(1u32));
    let b = Fq::new(rc(17), BigUint::from(1u32));
    let _ = a + b;
}
