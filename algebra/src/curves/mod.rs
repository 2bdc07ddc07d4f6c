//! Short-Weierstrass elliptic-curve arithmetic `y^2 = x^3 + a*x + b`,
//! generic over any [`Field`] (§4.3). The point-at-infinity is an explicit
//! tagged variant, never a null/`Option` standing in for the group
//! identity (Design Notes §9).

#[cfg(test)]
mod tests;

use crate::error::CurveError;
use crate::fields::Field;
use crate::BigUint;
use num_traits::Zero;

/// A point on an elliptic curve over `F`: either the distinguished point
/// at infinity `O`, or an affine pair `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Point<F: Field> {
    Infinity,
    Affine { x: F, y: F },
}

impl<F: Field> Point<F> {
    pub fn affine(x: F, y: F) -> Self {
        Point::Affine { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn x(&self) -> Option<&F> {
        match self {
            Point::Affine { x, .. } => Some(x),
            Point::Infinity => None,
        }
    }

    pub fn y(&self) -> Option<&F> {
        match self {
            Point::Affine { y, .. } => Some(y),
            Point::Infinity => None,
        }
    }

    /// `(x, y) -> (x, -y)`; `O -> O` (§4.3).
    pub fn negate(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: -y.clone(),
            },
        }
    }
}

/// `y^2 = x^3 + a*x + b` over `F`.
#[derive(Clone, Debug)]
pub struct Curve<F: Field> {
    pub a: F,
    pub b: F,
}

impl<F: Field> Curve<F> {
    /// Construct the curve, rejecting a singular discriminant
    /// `4a^3 + 27b^2 = 0` (§3/§7 `SingularCurve`).
    pub fn new(a: F, b: F) -> Result<Self, CurveError> {
        let four = a.from_int(4);
        let twenty_seven = a.from_int(27);
        let disc = four * a.pow(&BigUint::from(3u32)) + twenty_seven * b.pow(&BigUint::from(2u32));
        if disc.is_zero() {
            return Err(CurveError::Singular);
        }
        Ok(Curve { a, b })
    }

    /// `O` is on-curve by convention; otherwise `y^2 - x^3 - a*x - b = 0`
    /// (§4.3).
    pub fn on_curve(&self, p: &Point<F>) -> bool {
        match p {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = y.square();
                let rhs = x.pow(&BigUint::from(3u32)) + self.a.clone() * x.clone() + self.b.clone();
                lhs == rhs
            }
        }
    }

    /// `P + Q` per §4.3's case analysis: identity laws, `P + (-P) = O`,
    /// doubling when `P = Q` and `P.y != 0`, and the general chord slope
    /// otherwise.
    pub fn add(&self, p: &Point<F>, q: &Point<F>) -> Point<F> {
        let (px, py) = match p {
            Point::Infinity => return q.clone(),
            Point::Affine { x, y } => (x, y),
        };
        let (qx, qy) = match q {
            Point::Infinity => return p.clone(),
            Point::Affine { x, y } => (x, y),
        };

        if px == qx && *py == -qy.clone() {
            return Point::Infinity;
        }

        let lambda = if px == qx && py == qy {
            let three = px.from_int(3);
            let two = py.from_int(2);
            let numerator = three * px.square() + self.a.clone();
            let denominator = two * py.clone();
            numerator
                .div(&denominator)
                .expect("doubling precondition P.y != 0 violated")
        } else {
            let numerator = qy.clone() - py.clone();
            let denominator = qx.clone() - px.clone();
            numerator
                .div(&denominator)
                .expect("distinct-x precondition violated")
        };

        let x3 = lambda.square() - px.clone() - qx.clone();
        let y3 = lambda * (px.clone() - x3.clone()) - py.clone();
        Point::Affine { x: x3, y: y3 }
    }

    pub fn sub(&self, p: &Point<F>, q: &Point<F>) -> Point<F> {
        self.add(p, &q.negate())
    }

    /// `[n]P` via left-to-right binary double-and-add (§4.3). `[0]P = O`;
    /// `[-n]P = [n](-P)`.
    pub fn scalar_mul(&self, n: &BigUint, p: &Point<F>) -> Point<F> {
        if n.is_zero() || p.is_infinity() {
            return Point::Infinity;
        }
        let bits = n.to_radix_be(2);
        let mut result = Point::Infinity;
        let mut addend = p.clone();
        for bit in bits.into_iter().rev() {
            if bit == 1 {
                result = self.add(&result, &addend);
            }
            addend = self.add(&addend, &addend);
        }
        result
    }

    /// `[-n]P = [n](-P)`, for signed scalars represented as `(sign, magnitude)`.
    pub fn scalar_mul_signed(&self, n: &BigUint, negative: bool, p: &Point<F>) -> Point<F> {
        if negative {
            self.scalar_mul(n, &p.negate())
        } else {
            self.scalar_mul(n, p)
        }
    }
}
