//! Curve point sampling and the hash-to-curve map `H1`/`H2` (§4.6),
//! specific to the `a=0, b=1` curve over `F_{q^2}` the IBE layer runs on
//! (unlike `algebra::curves`, which stays generic over any field/curve).

use crate::error::IbeError;
use crate::hash::IdHash;
use crate::rng::RandomSource;
use algebra::curves::{Curve, Point};
use algebra::fields::{fq::Fq, fq2::Fq2};
use algebra::modular::mod_pow;
use algebra::BigUint;
use std::rc::Rc;

/// Sample a uniform random point of `E: y^2 = x^3 + 1` over `F_{q^2}`
/// (§4.6): draw `y` uniformly in `[0, q)`, compute the unique cube root
/// `x = (y^2 - 1)^{(2q-1)/3} mod q` (unique because `q mod 3 = 2`), and
/// embed both coordinates as `F_q -> F_{q^2}` lifts.
pub fn find_random_point<R: RandomSource>(modulus: &Rc<BigUint>, rng: &mut R) -> Point<Fq2> {
    let q = &**modulus;
    let y_value = rng.random_range(&BigUint::from(0u32), q);
    let y = Fq::new(modulus.clone(), y_value);
    let x = cube_root_of_y_squared_minus_one(&y, modulus);
    Point::affine(Fq2::from_fq(&x), Fq2::from_fq(&y))
}

fn cube_root_of_y_squared_minus_one(y: &Fq, modulus: &Rc<BigUint>) -> Fq {
    let one = Fq::new(modulus.clone(), BigUint::from(1u32));
    let radicand = y.clone() * y.clone() - one;
    let exponent = (BigUint::from(2u32) * &**modulus - BigUint::from(1u32)) / BigUint::from(3u32);
    Fq::new(modulus.clone(), mod_pow(radicand.value(), &exponent, modulus))
}

/// Repeatedly sample a random point until `[6]P != O`. `#E(F_{q^2}) =
/// (6l)^2`, so `[6]P` always has order 1 or `l`; this is the
/// order-l-point search of §4.6, bounded so an adversarial/degenerate
/// curve cannot spin forever.
pub fn find_order_l_point<R: RandomSource>(
    curve: &Curve<Fq2>,
    modulus: &Rc<BigUint>,
    rng: &mut R,
    max_attempts: u32,
) -> Result<Point<Fq2>, IbeError> {
    for _ in 0..max_attempts {
        let p = find_random_point(modulus, rng);
        let p6 = curve.scalar_mul(&BigUint::from(6u32), &p);
        if !p6.is_infinity() {
            return Ok(p6);
        }
    }
    log::warn!("find_order_l_point found only the identity after {} attempts", max_attempts);
    Err(IbeError::HashToCurveFailure(max_attempts))
}

/// `H1(ID) -> ` an order-`l` point: `y = sha1(ID) mod q`, then the same
/// cube-root construction as [`find_random_point`], then `[6]` to land in
/// the order-`l` subgroup.
pub fn h1(
    curve: &Curve<Fq2>,
    modulus: &Rc<BigUint>,
    hasher: &dyn IdHash,
    id: &[u8],
) -> Result<Point<Fq2>, IbeError> {
    let y_value = hasher.hash_id(id) % &**modulus;
    let y = Fq::new(modulus.clone(), y_value);
    let x = cube_root_of_y_squared_minus_one(&y, modulus);
    let p = Point::affine(Fq2::from_fq(&x), Fq2::from_fq(&y));
    debug_assert!(curve.on_curve(&p), "hash-to-curve point must land on the curve");

    let p6 = curve.scalar_mul(&BigUint::from(6u32), &p);
    if p6.is_infinity() {
        log::warn!("h1 landed on the identity point; caller should perturb the identity string");
        return Err(IbeError::HashToCurveFailure(1));
    }
    Ok(p6)
}

/// `H2(g, n) -> ` an `n`-bit string: `v = Tr(g).val + q * g.y.val`,
/// formatted as binary padded to at least `n` bits, taking the first `n`
/// bits (§4.6). `Tr(g).val` ranges over `[0, q)`, so `(Tr(g), g.y)` is
/// recoverable from `v` — this is what makes `H2` injective.
pub fn h2(g: &Fq2, n: usize) -> Vec<bool> {
    let trace = g.trace();
    let modulus = trace.modulus().clone();
    let v = trace.value() + &*modulus * g.y.value();

    let mut bits: Vec<bool> = v.to_radix_be(2).into_iter().map(|b| b == 1).collect();
    if bits.len() < n {
        let mut padded = vec![false; n - bits.len()];
        padded.extend(bits);
        bits = padded;
    }
    bits.truncate(n);
    bits
}

/// Bitwise xor of two equal-length bit vectors (§4.7's `V = m XOR H2(...)`).
pub fn xor_bits(a: &[bool], b: &[bool]) -> Vec<bool> {
    assert_eq!(a.len(), b.len(), "xor operands must have equal length");
    a.iter().zip(b.iter()).map(|(x, y)| x != y).collect()
}
