//! The distortion map `phi((x, y)) = (omega*x, y)` with `omega = (1, 0)`
//! (§3/§4.5), which carries the order-`l` subgroup generated by `P` to a
//! linearly independent one, making the modified Weil pairing
//! non-degenerate.

use algebra::curves::Point;
use algebra::fields::{fq2::Fq2, Field};

pub fn distort(p: &Point<Fq2>) -> Point<Fq2> {
    match p {
        Point::Infinity => Point::Infinity,
        Point::Affine { x, y } => {
            let witness = x.x.clone();
            let omega = Fq2::new(witness.one_like(), witness.zero_like());
            Point::affine(x.clone() * omega, y.clone())
        }
    }
}
