//! Boneh–Franklin identity-based encryption (§4.7) built on the
//! prime-field/extension-field/curve/pairing arithmetic in [`algebra`]:
//! `SETUP` samples fresh curve parameters, `EXTRACT` derives an
//! identity's private key from the master secret, and `ENCRYPT`/`DECRYPT`
//! use the modified Weil pairing as the bilinear map the scheme relies on.

pub mod distortion;
pub mod error;
pub mod hash;
pub mod hash_to_curve;
pub mod rng;
pub mod weil;

pub use error::IbeError;
pub use hash::{IdHash, Sha1IdHash};
pub use rng::{OsRandomSource, RandomSource};

use algebra::curves::{Curve, Point};
use algebra::fields::{fq::Fq, fq2::Fq2, Field};
use algebra::primality::{is_probable_prime, sample_prime};
use algebra::BigUint;
use std::rc::Rc;

const SETUP_ATTEMPTS: u32 = 64;
const MILLER_RABIN_ROUNDS: u32 = 40;
const ORDER_L_POINT_ATTEMPTS: u32 = 256;

/// The public parameters `SETUP` produces: the curve, a generator `P` of
/// the order-`l` subgroup, the prime `l` itself, and `q` (needed by the
/// hash-to-curve map, carried alongside rather than re-derived).
#[derive(Clone, Debug)]
pub struct IbeParams {
    pub curve: Curve<Fq2>,
    pub p: Point<Fq2>,
    pub ell: BigUint,
    pub modulus: Rc<BigUint>,
}

#[derive(Clone, Debug)]
pub struct MasterKeypair {
    pub s: BigUint,
    pub p_pub: Point<Fq2>,
}

#[derive(Clone, Debug)]
pub struct ExtractedKey {
    pub q_id: Point<Fq2>,
    pub d_id: Point<Fq2>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ciphertext {
    pub u: Point<Fq2>,
    pub v: Vec<bool>,
}

/// `SETUP(lo, hi)`: sample a prime `l` in `[lo, hi]`, set `q = 6l - 1`
/// until `q` is also prime, build `F_q`, `F_{q^2}`, the curve `E: y^2 =
/// x^3 + 1`, and an order-`l` generator `P` (§4.7 step 1-4).
pub fn setup<R: RandomSource>(lo: &BigUint, hi: &BigUint, rng: &mut R) -> Result<IbeParams, IbeError> {
    for _ in 0..SETUP_ATTEMPTS {
        let ell = match sample_prime(lo, hi, MILLER_RABIN_ROUNDS, SETUP_ATTEMPTS, &mut RngShim(rng)) {
            Some(ell) => ell,
            None => return Err(IbeError::InvalidParameter(SETUP_ATTEMPTS)),
        };
        let q = BigUint::from(6u32) * &ell - BigUint::from(1u32);
        if !is_probable_prime(&q, MILLER_RABIN_ROUNDS, &mut RngShim(rng)) {
            continue;
        }

        let modulus = Rc::new(q);
        let zero = Fq::new(modulus.clone(), BigUint::from(0u32));
        let a = Fq2::from_fq(&zero);
        let b = Fq2::int_to_fq2(&zero, 1);
        let curve = Curve::new(a, b)?;
        let p = hash_to_curve::find_order_l_point(&curve, &modulus, rng, ORDER_L_POINT_ATTEMPTS)?;

        return Ok(IbeParams {
            curve,
            p,
            ell,
            modulus,
        });
    }
    Err(IbeError::InvalidParameter(SETUP_ATTEMPTS))
}

/// Bridges the crate's [`RandomSource`] seam to the `rand::Rng` bound
/// [`algebra::primality`] expects, so the two crates don't have to agree
/// on a concrete RNG type.
struct RngShim<'a, R: RandomSource>(&'a mut R);

impl<'a, R: RandomSource> rand::RngCore for RngShim<'a, R> {
    fn next_u32(&mut self) -> u32 {
        let bits = self.0.random_bits(32);
        bits_to_u32(&bits)
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            let bits = self.0.random_bits(8);
            *byte = bits_to_u8(&bits);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn bits_to_u32(bits: &[bool]) -> u32 {
    bits.iter().fold(0u32, |acc, &b| (acc << 1) | (b as u32))
}

fn bits_to_u8(bits: &[bool]) -> u8 {
    bits.iter().fold(0u8, |acc, &b| (acc << 1) | (b as u8))
}

/// `MASTER-KEYPAIR(E, P, l)`: sample `s` in `[1, l-1]`, return `(s, [s]P)`
/// (§4.7).
pub fn master_keypair<R: RandomSource>(params: &IbeParams, rng: &mut R) -> MasterKeypair {
    let s = rng.random_range(&BigUint::from(1u32), &params.ell);
    let p_pub = params.curve.scalar_mul(&s, &params.p);
    MasterKeypair { s, p_pub }
}

/// `EXTRACT(E, s, l, ID)`: `Q_ID <- H1(ID)`, `d_ID <- [s]Q_ID` (§4.7).
/// `Q_ID` is not secret; it is returned for convenience.
pub fn extract(
    params: &IbeParams,
    s: &BigUint,
    hasher: &dyn IdHash,
    id: &[u8],
) -> Result<ExtractedKey, IbeError> {
    let q_id = hash_to_curve::h1(&params.curve, &params.modulus, hasher, id)?;
    let d_id = params.curve.scalar_mul(s, &q_id);
    Ok(ExtractedKey { q_id, d_id })
}

/// `ENCRYPT(E, m, P_pub, Q_ID, P, l, n)` (§4.7): sample `r`, derive
/// `g_ID = e_hat(Q_ID, P_pub)`, `U = [r]P`, `V = m XOR H2(g_ID^r, n)`.
pub fn encrypt<R: RandomSource>(
    params: &IbeParams,
    m: &[bool],
    p_pub: &Point<Fq2>,
    q_id: &Point<Fq2>,
    rng: &mut R,
) -> Result<Ciphertext, IbeError> {
    let r = rng.random_range(&BigUint::from(1u32), &params.ell);
    let g_id = weil::modified_weil_pairing(&params.curve, &params.modulus, q_id, p_pub, &params.ell, rng)?;
    let u = params.curve.scalar_mul(&r, &params.p);
    let g_id_r = g_id.pow(&r);
    let v = hash_to_curve::xor_bits(m, &hash_to_curve::h2(&g_id_r, m.len()));
    Ok(Ciphertext { u, v })
}

/// `DECRYPT(E, (U, V), d_ID, l, n)` (§4.7): `w = e_hat(d_ID, U)`, return
/// `V XOR H2(w, n)`.
pub fn decrypt<R: RandomSource>(
    params: &IbeParams,
    ciphertext: &Ciphertext,
    d_id: &Point<Fq2>,
    rng: &mut R,
) -> Result<Vec<bool>, IbeError> {
    let w = weil::modified_weil_pairing(&params.curve, &params.modulus, d_id, &ciphertext.u, &params.ell, rng)?;
    Ok(hash_to_curve::xor_bits(
        &ciphertext.v,
        &hash_to_curve::h2(&w, ciphertext.v.len()),
    ))
}
