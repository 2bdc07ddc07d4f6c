//! Free-standing modular arithmetic on [`BigUint`], used before an `F_q`
//! value exists: primality testing and hash-to-curve both need modular
//! exponentiation against a candidate modulus that `Fq` itself has not
//! yet validated.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `a^e mod m`, right-to-left square-and-multiply over the binary
/// representation of `e` (same result as the left-to-right form spec
/// §4.1 describes, just accumulated LSB-first).
pub fn mod_pow(a: &BigUint, e: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }
    let mut result = BigUint::one();
    let mut base = a % m;
    let mut exp = e.clone();
    let two = BigUint::from(2u32);
    while !exp.is_zero() {
        if &exp % &two == BigUint::one() {
            result = (&result * &base) % m;
        }
        base = (&base * &base) % m;
        exp /= &two;
    }
    result
}

/// `1/a mod m` via Fermat's little theorem: `a^{m-2} mod m`, valid when
/// `m` is prime and `a % m != 0`. Callers must uphold that precondition;
/// violating it is a programmer error (§7 `DivisionByZero`), not a
/// recoverable one, so this returns a plain value, not a `Result`.
pub fn mod_inverse_fermat(a: &BigUint, m: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    assert!(m > &two, "modulus too small for Fermat inversion");
    let exponent = m - &two;
    mod_pow(a, &exponent, m)
}
